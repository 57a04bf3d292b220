use log::{debug, info};
use std::fmt;

use crate::client::{SpaceTradersClient, Transport};
use crate::error::ApiResult;
use crate::models::Registration;

/// A newly created account, ready for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReport {
    pub registration: Registration,
}

impl RegistrationReport {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("token", self.registration.token.clone()),
            ("accountId", self.registration.account_id.clone()),
            ("symbol", self.registration.symbol.clone()),
        ]
    }
}

impl fmt::Display for RegistrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.fields() {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

pub async fn register_account<T: Transport>(
    client: &SpaceTradersClient<T>,
    name: &str,
    faction: &str,
) -> ApiResult<RegistrationReport> {
    info!("Registering account \"{}\" with faction {}", name, faction);
    match client.register(name, faction).await {
        Ok(registration) => {
            info!("Account \"{}\" successfully created!", name);
            Ok(RegistrationReport { registration })
        }
        Err(e) => {
            debug!("register \"{}\" failed: {}", name, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use crate::client::mock::MockTransport;
    use crate::error::ErrorKind;

    fn mock_client(transport: MockTransport) -> SpaceTradersClient<MockTransport> {
        SpaceTradersClient::with_transport(&ClientConfig::new("https://api.test/v2"), transport)
    }

    #[tokio::test]
    async fn report_lists_token_account_and_symbol() {
        let client = mock_client(MockTransport::new().reply(
            201,
            r#"{"data":{"token":"abc","agent":{"accountId":"1","symbol":"NEW"}}}"#,
        ));
        let report = register_account(&client, "NEW", "COSMIC").await.unwrap();
        assert_eq!(report.to_string(), "token: abc\naccountId: 1\nsymbol: NEW\n");
    }

    #[tokio::test]
    async fn validation_failure_carries_server_detail() {
        let client = mock_client(
            MockTransport::new().reply(422, r#"{"error":{"data":{"symbol":["taken"]}}}"#),
        );
        let err = register_account(&client, "NEW", "COSMIC").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains(r#"{"symbol":["taken"]}"#));
    }
}
