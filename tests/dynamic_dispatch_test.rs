use kiosk::domain::menu::Price;
use kiosk::domain::payment::{AuthorizationOutcome, PaymentMethod};
use kiosk::domain::ports::PaymentGatewayBox;
use kiosk::infrastructure::simulated::{ScriptedGateway, SimulatedBehavior, SimulatedGateway};
use std::time::Duration;

#[tokio::test]
async fn test_gateways_as_trait_objects() {
    let simulated: PaymentGatewayBox = Box::new(SimulatedGateway::new(
        Duration::from_millis(1),
        SimulatedBehavior::Approve,
    ));
    let scripted: PaymentGatewayBox = Box::new(ScriptedGateway::new(vec![Ok(
        AuthorizationOutcome::Declined {
            reason: "limit".to_string(),
        },
    )]));

    // Verify Send + Sync by spawning tasks
    let sim_handle = tokio::spawn(async move {
        simulated
            .authorize(Price::new(2500), PaymentMethod::Card)
            .await
    });
    let scripted_handle = tokio::spawn(async move {
        scripted
            .authorize(Price::new(2500), PaymentMethod::Cash)
            .await
    });

    assert!(matches!(
        sim_handle.await.unwrap(),
        Ok(AuthorizationOutcome::Approved { .. })
    ));
    assert!(matches!(
        scripted_handle.await.unwrap(),
        Ok(AuthorizationOutcome::Declined { .. })
    ));
}
