use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A user object from the customer list API (JSONPlaceholder shape)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: ApiAddress,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiAddress {
    pub geo: ApiGeo,
}

/// Geographic coordinates; the API delivers them as strings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiGeo {
    pub lat: String,
    pub lng: String,
}

/// A customer row with the nested geo fields flattened to top level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub lat: f64,
    pub lng: f64,
}

impl ApiUser {
    /// Flatten the nested address/geo fields into a customer row,
    /// keeping only the fixed column subset used by the merge
    pub fn flatten(&self) -> Result<CustomerRecord> {
        let lat = self
            .address
            .geo
            .lat
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid latitude for user {}", self.id))?;
        let lng = self
            .address
            .geo
            .lng
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Invalid longitude for user {}", self.id))?;

        Ok(CustomerRecord {
            customer_id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            lat,
            lng,
        })
    }
}
