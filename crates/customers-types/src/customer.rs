//! Customer types

use serde::{Deserialize, Serialize};

/// Customer record as stored and served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub address: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default)]
    pub orders: Vec<Order>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Gender label, derived from the customer id for new records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Even ids are female, odd ids are male.
    pub fn for_id(id: i64) -> Self {
        if id % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "female"),
            Gender::Male => write!(f, "male"),
        }
    }
}

/// US state reference data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    pub id: i64,
    pub abbreviation: String,
    pub name: String,
}

/// Line item embedded in a customer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub product_name: String,
    pub item_cost: f64,
}

/// Body of a customer creation request.
///
/// `id` and `gender` are assigned by the server, so any values submitted for
/// them are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: Option<State>,
    pub orders: Vec<Order>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CustomerDraft {
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: Gender::for_id(id),
            address: self.address,
            city: self.city,
            state: self.state,
            orders: self.orders,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Body of a customer update request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
}

impl CustomerUpdate {
    /// Overwrites the editable fields; id, gender, state and orders are kept.
    pub fn apply_to(self, customer: &mut Customer) {
        customer.first_name = self.first_name;
        customer.last_name = self.last_name;
        customer.address = self.address;
        customer.city = self.city;
    }
}
