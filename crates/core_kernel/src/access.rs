//! Access roles and actor tags
//!
//! The core does not authenticate. The login gate (out of scope) tags every
//! inbound call with a role and, for client-scoped operations, the client id
//! the session belongs to. All write operations authorize against this tag;
//! the dashboards share one capability check instead of duplicating it per
//! screen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::identifiers::ClientId;

/// Session role assigned by the login gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
    Client,
}

impl Role {
    /// True for back-office roles allowed to resolve claims, approve
    /// payments, and change contract status.
    pub fn can_review(&self) -> bool {
        matches!(self, Role::Admin | Role::Agent)
    }

    /// True if the role may read records belonging to any client.
    pub fn can_read_all(&self) -> bool {
        self.can_review()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::Agent => "agent",
            Role::Client => "client",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "agent" => Ok(Role::Agent),
            "client" => Ok(Role::Client),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The caller of a core operation
///
/// `client_id` is present for client sessions and names the client the
/// session acts on behalf of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub role: Role,
    pub client_id: Option<ClientId>,
}

impl Actor {
    /// Creates an admin actor
    pub fn admin() -> Self {
        Self {
            role: Role::Admin,
            client_id: None,
        }
    }

    /// Creates an agent actor
    pub fn agent() -> Self {
        Self {
            role: Role::Agent,
            client_id: None,
        }
    }

    /// Creates a client actor bound to its own client record
    pub fn client(client_id: ClientId) -> Self {
        Self {
            role: Role::Client,
            client_id: Some(client_id),
        }
    }

    /// True if this actor owns the given client record or holds a
    /// back-office role.
    pub fn may_act_for(&self, client_id: ClientId) -> bool {
        match self.role {
            Role::Admin | Role::Agent => true,
            Role::Client => self.client_id == Some(client_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_capability() {
        assert!(Role::Admin.can_review());
        assert!(Role::Agent.can_review());
        assert!(!Role::Client.can_review());
    }

    #[test]
    fn test_client_acts_only_for_itself() {
        let own = ClientId::new();
        let other = ClientId::new();
        let actor = Actor::client(own);

        assert!(actor.may_act_for(own));
        assert!(!actor.may_act_for(other));
        assert!(Actor::agent().may_act_for(other));
    }

    #[test]
    fn test_role_parse_round_trip() {
        for role in [Role::Admin, Role::Agent, Role::Client] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
