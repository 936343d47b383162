//! Search result rows
//!
//! A [`SearchReport`] is one entity matched by a search. The fields are
//! copied verbatim from the service (wire names are kept as serde renames),
//! the typed views (`entity_type`, `silo`, `regon14`, dates) are derived on
//! demand so nothing the service sent is lost.

use chrono::NaiveDate;
use core_kernel::temporal::parse_optional_report_date;
use core_kernel::JsonSerializable;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::RegistryError;

/// Kind of entity a search row describes (`Typ`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    /// `P` - legal entity
    LegalEntity,
    /// `F` - natural person running a business
    NaturalPerson,
    /// `LP` - local unit of a legal entity
    LegalEntityLocalUnit,
    /// `LF` - local unit of a natural person
    NaturalPersonLocalUnit,
}

impl EntityType {
    /// Parses the `Typ` field; the service is not consistent about case
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "p" => Some(EntityType::LegalEntity),
            "f" => Some(EntityType::NaturalPerson),
            "lp" => Some(EntityType::LegalEntityLocalUnit),
            "lf" => Some(EntityType::NaturalPersonLocalUnit),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            EntityType::LegalEntity => "P",
            EntityType::NaturalPerson => "F",
            EntityType::LegalEntityLocalUnit => "LP",
            EntityType::NaturalPersonLocalUnit => "LF",
        }
    }

    pub fn is_local_unit(&self) -> bool {
        matches!(
            self,
            EntityType::LegalEntityLocalUnit | EntityType::NaturalPersonLocalUnit
        )
    }
}

/// Register partition an entity is kept in (`SilosID`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Silo {
    /// 1 - business activity registered in CEIDG
    Ceidg,
    /// 2 - agricultural activity
    Agricultural,
    /// 3 - other activity
    Other,
    /// 4 - activity deleted from REGON before 2014-11-08
    DeletedBefore20141108,
    /// 6 - legal entity
    LegalEntity,
}

impl Silo {
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim() {
            "1" => Some(Silo::Ceidg),
            "2" => Some(Silo::Agricultural),
            "3" => Some(Silo::Other),
            "4" => Some(Silo::DeletedBefore20141108),
            "6" => Some(Silo::LegalEntity),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Silo::Ceidg => 1,
            Silo::Agricultural => 2,
            Silo::Other => 3,
            Silo::DeletedBefore20141108 => 4,
            Silo::LegalEntity => 6,
        }
    }
}

/// One entity returned by a search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    #[serde(rename = "Regon", default)]
    pub regon: String,
    #[serde(rename = "Nip", default)]
    pub nip: String,
    #[serde(rename = "StatusNip", default)]
    pub nip_status: String,
    #[serde(rename = "Nazwa", default)]
    pub name: String,
    #[serde(rename = "Wojewodztwo", default)]
    pub province: String,
    #[serde(rename = "Powiat", default)]
    pub district: String,
    #[serde(rename = "Gmina", default)]
    pub community: String,
    #[serde(rename = "Miejscowosc", default)]
    pub city: String,
    #[serde(rename = "KodPocztowy", default)]
    pub zip_code: String,
    #[serde(rename = "Ulica", default)]
    pub street: String,
    #[serde(rename = "NrNieruchomosci", default)]
    pub property_number: String,
    #[serde(rename = "NrLokalu", default)]
    pub apartment_number: String,
    #[serde(rename = "Typ", default)]
    pub entity_type_code: String,
    #[serde(rename = "SilosID", default)]
    pub silo_id: String,
    #[serde(rename = "DataZakonczeniaDzialalnosci", default)]
    pub activity_end_date: String,
    #[serde(rename = "MiejscowoscPoczty", default)]
    pub post_city: String,
}

impl SearchReport {
    /// REGON in its 14-digit form, right padded with zeros
    pub fn regon14(&self) -> String {
        format!("{:0<14}", self.regon)
    }

    pub fn entity_type(&self) -> Option<EntityType> {
        EntityType::from_code(&self.entity_type_code)
    }

    pub fn silo(&self) -> Option<Silo> {
        Silo::from_id(&self.silo_id)
    }

    /// Date the activity ended, `None` while the entity is active
    pub fn activity_end_date(&self) -> Result<Option<NaiveDate>, RegistryError> {
        Ok(parse_optional_report_date(&self.activity_end_date)?)
    }

    pub fn is_active(&self) -> bool {
        self.activity_end_date.trim().is_empty()
    }
}

impl JsonSerializable for SearchReport {
    fn json_serialize(&self) -> Value {
        json!({
            "regon": self.regon,
            "regon14": self.regon14(),
            "nip": self.nip,
            "nipStatus": self.nip_status,
            "name": self.name,
            "province": self.province,
            "district": self.district,
            "community": self.community,
            "city": self.city,
            "zipCode": self.zip_code,
            "street": self.street,
            "propertyNumber": self.property_number,
            "apartmentNumber": self.apartment_number,
            "type": self.entity_type_code.to_ascii_lowercase(),
            "silo": self.silo_id,
            "activityEndDate": self.activity_end_date,
            "postCity": self.post_city,
        })
    }
}
