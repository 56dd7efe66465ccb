mod common;
use axum::http::StatusCode;
use learnpath::model::entity::{PaymentMethod, PaymentReceipt, Plan};
use learnpath::web::dto::path::PathResponse;

use crate::common::{
    Action, Flow, complete_module_action, complete_until, confirm_payment_action, setup_server,
    start_session_action,
};

#[tokio::test]
async fn route_plans_test() {
    let mut server = setup_server().await;

    Flow::new()
        .step(Action::new("plans", "GET", "/api/v1/payment/plans").assert_body(|body| {
            let plans: Vec<Plan> = serde_json::from_str(body).expect("Invalid body format");
            assert_eq!(plans.len(), 3);
            let recommended: Vec<_> = plans.iter().filter(|p| p.recommended()).collect();
            assert_eq!(recommended.len(), 1);
            assert_eq!(recommended[0].id(), "complete");
        }))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_confirm_payment_test() {
    let mut server = setup_server().await;

    Flow::new()
        .step(start_session_action())
        .step(
            Action::new("payment_get", "GET", "/api/v1/payment")
                .with_expect(StatusCode::NOT_FOUND)
                .assert_body(|body| {
                    assert!(body.contains("payment not found"));
                    assert!(!body.contains("plan"));
                }),
        )
        .step(confirm_payment_action("gold", "card").with_expect(StatusCode::NOT_FOUND))
        .step(confirm_payment_action("complete", "paypal").assert_body(|body| {
            let receipt: PaymentReceipt = serde_json::from_str(body).expect("Invalid body format");
            assert_eq!(receipt.plan_id(), "complete");
            assert_eq!(receipt.method(), PaymentMethod::Paypal);
            assert_eq!(receipt.amount_cents(), 9999);
        }))
        .step(confirm_payment_action("basic", "card").with_expect(StatusCode::CONFLICT))
        .step(Action::new("payment_get", "GET", "/api/v1/payment").assert_body(|body| {
            assert!(body.contains("complete"));
        }))
        .step(Action::new("session_get", "GET", "/api/v1/session").assert_body(|body| {
            assert!(body.contains(r#""premium_unlocked":true"#));
        }))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_payment_does_not_skip_order_test() {
    let mut server = setup_server().await;

    Flow::new()
        .step(start_session_action())
        .step(confirm_payment_action("business", "card"))
        // paid modules still open in sequence
        .step(complete_module_action("m4").with_expect(StatusCode::FORBIDDEN))
        .run(&mut server)
        .await;
}

#[tokio::test]
async fn route_paid_modules_after_payment_test() {
    let mut server = setup_server().await;

    complete_until(Flow::new().step(start_session_action()), 3)
        .step(confirm_payment_action("basic", "card"))
        .step(complete_module_action("m4").assert_body(|body| {
            let resp: PathResponse = serde_json::from_str(body).unwrap();
            assert_eq!(resp.progress, 80);
            assert!(resp.project_unlocked);
        }))
        .step(complete_module_action("m5").assert_body(|body| {
            let resp: PathResponse = serde_json::from_str(body).unwrap();
            assert_eq!(resp.progress, 100);
            assert_eq!(resp.completed, resp.total);
        }))
        .run(&mut server)
        .await;
}
