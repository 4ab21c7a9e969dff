//! Client DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use domain_client::client::{Client, ClientProfile};

#[derive(Debug, Deserialize)]
pub struct RegisterClientRequest {
    pub first_names: String,
    pub last_names: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub city: Option<String>,
}

impl From<RegisterClientRequest> for ClientProfile {
    fn from(request: RegisterClientRequest) -> Self {
        ClientProfile {
            first_names: request.first_names,
            last_names: request.last_names,
            national_id: request.national_id,
            phone: request.phone,
            email: request.email,
            date_of_birth: request.date_of_birth,
            address: request.address,
            city: request.city,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: String,
    pub full_name: String,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub city: Option<String>,
    pub registered_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.to_string(),
            full_name: client.full_name(),
            national_id: client.profile.national_id,
            phone: client.profile.phone,
            email: client.profile.email,
            date_of_birth: client.profile.date_of_birth,
            address: client.profile.address,
            city: client.profile.city,
            registered_at: client.registered_at,
        }
    }
}
