//! End-to-end lifecycle tests over the application services
//!
//! These run the full path a request takes below the HTTP layer:
//! registration, contracting, premium payment, activation, claims, and
//! review, against the in-memory stores.

use std::sync::Arc;

use core_kernel::{Actor, ClientId, Currency, Money};
use rust_decimal_macros::dec;

use app_engine::{ClaimService, ClientService, ContractService, PaymentService};
use domain_billing::error::PaymentError;
use domain_billing::payment::PaymentFilter;
use domain_claims::claim::{ClaimStatus, ReviewDecision};
use domain_claims::error::ClaimError;
use domain_contract::beneficiary::Beneficiary;
use domain_contract::contract::{Contract, ContractFilter, ContractStatus};
use domain_contract::error::ContractError;
use domain_contract::plan::PlanType;
use infra_store::{
    InMemoryClaimStore, InMemoryClientStore, InMemoryContractStore, InMemoryPaymentStore,
};
use test_utils::{
    DateFixtures, FileFixtures, MoneyFixtures, ProfileFixtures, TestBeneficiaryBuilder,
    TestSubmissionBuilder,
};

struct World {
    clients: ClientService,
    contracts: ContractService,
    claims: Arc<ClaimService>,
    payments: PaymentService,
}

fn world() -> World {
    let client_store = Arc::new(InMemoryClientStore::new());
    let contract_store = Arc::new(InMemoryContractStore::new());
    let claim_store = Arc::new(InMemoryClaimStore::new());
    let payment_store = Arc::new(InMemoryPaymentStore::new());

    World {
        clients: ClientService::new(client_store.clone()),
        contracts: ContractService::new(contract_store.clone(), client_store),
        claims: Arc::new(ClaimService::new(claim_store, contract_store.clone())),
        payments: PaymentService::new(payment_store, contract_store),
    }
}

async fn registered_client(world: &World, national_id: &str) -> ClientId {
    world
        .clients
        .register_client(ProfileFixtures::valid(national_id))
        .await
        .unwrap()
        .id
}

async fn health_contract(world: &World, client_id: ClientId) -> Contract {
    world
        .contracts
        .create_contract(&Actor::client(client_id), client_id, PlanType::Health, vec![])
        .await
        .unwrap()
}

/// Pays the first premium and has an agent approve it
async fn activate(world: &World, contract: &Contract) {
    let payment = world
        .payments
        .record_payment(
            &Actor::client(contract.client_id),
            contract.id,
            contract.monthly_premium,
            DateFixtures::today(),
            Some(FileFixtures::pdf_receipt()),
        )
        .await
        .unwrap();
    world
        .payments
        .approve_payment(&Actor::agent(), payment.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn first_approved_payment_activates_contract_exactly_once() {
    let world = world();
    let client_id = registered_client(&world, "10203040").await;
    let contract = health_contract(&world, client_id).await;
    assert_eq!(contract.status, ContractStatus::Pending);

    let payment = world
        .payments
        .record_payment(
            &Actor::client(client_id),
            contract.id,
            MoneyFixtures::health_premium(),
            DateFixtures::today(),
            Some(FileFixtures::pdf_receipt()),
        )
        .await
        .unwrap();

    let approved = world
        .payments
        .approve_payment(&Actor::agent(), payment.id)
        .await
        .unwrap();
    assert!(approved.is_approved());

    let listed = world
        .contracts
        .list_contracts(&Actor::admin(), ContractFilter::for_client(client_id))
        .await
        .unwrap();
    assert_eq!(listed[0].status, ContractStatus::Active);
    let activated_at = listed[0].activated_at;
    assert!(activated_at.is_some());

    // A second approval of the same payment is rejected and changes nothing
    let second = world
        .payments
        .approve_payment(&Actor::admin(), payment.id)
        .await;
    assert!(matches!(second, Err(PaymentError::AlreadyApproved)));

    let listed = world
        .contracts
        .list_contracts(&Actor::admin(), ContractFilter::for_client(client_id))
        .await
        .unwrap();
    assert_eq!(listed[0].status, ContractStatus::Active);
    assert_eq!(listed[0].activated_at, activated_at);
}

#[tokio::test]
async fn payment_amount_must_match_the_premium() {
    let world = world();
    let client_id = registered_client(&world, "10203041").await;
    let contract = health_contract(&world, client_id).await;

    let result = world
        .payments
        .record_payment(
            &Actor::client(client_id),
            contract.id,
            Money::new(dec!(68), Currency::USD),
            DateFixtures::today(),
            Some(FileFixtures::pdf_receipt()),
        )
        .await;
    assert!(matches!(result, Err(PaymentError::AmountMismatch { .. })));
}

#[tokio::test]
async fn claims_require_an_active_owned_contract() {
    let world = world();
    let client_id = registered_client(&world, "10203042").await;
    let contract = health_contract(&world, client_id).await;

    // Pending contract: no claims yet
    let result = world
        .claims
        .submit_claim(
            &Actor::client(client_id),
            contract.id,
            TestSubmissionBuilder::new().build(),
        )
        .await;
    assert!(matches!(result, Err(ClaimError::NoActiveContract(_))));

    activate(&world, &contract).await;

    // Another client cannot claim against it either
    let intruder = registered_client(&world, "10203043").await;
    let result = world
        .claims
        .submit_claim(
            &Actor::client(intruder),
            contract.id,
            TestSubmissionBuilder::new().build(),
        )
        .await;
    assert!(matches!(result, Err(ClaimError::NoActiveContract(_))));

    // The owner can
    let claim = world
        .claims
        .submit_claim(
            &Actor::client(client_id),
            contract.id,
            TestSubmissionBuilder::new()
                .with_attachment(FileFixtures::jpeg_invoice())
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(claim.status, ClaimStatus::Pending);
    assert_eq!(claim.attachments.len(), 1);
}

#[tokio::test]
async fn claim_amount_must_sit_on_a_plan_tier() {
    let world = world();
    let client_id = registered_client(&world, "10203044").await;
    let contract = health_contract(&world, client_id).await;
    activate(&world, &contract).await;

    let result = world
        .claims
        .submit_claim(
            &Actor::client(client_id),
            contract.id,
            TestSubmissionBuilder::new()
                .with_amount(MoneyFixtures::unlisted_amount())
                .build(),
        )
        .await;
    assert!(matches!(result, Err(ClaimError::AmountNotAllowed { .. })));
}

#[tokio::test]
async fn future_expense_dates_are_rejected() {
    let world = world();
    let client_id = registered_client(&world, "10203045").await;
    let contract = health_contract(&world, client_id).await;
    activate(&world, &contract).await;

    let result = world
        .claims
        .submit_claim(
            &Actor::client(client_id),
            contract.id,
            TestSubmissionBuilder::new()
                .with_expense_date(DateFixtures::tomorrow())
                .build(),
        )
        .await;
    assert!(matches!(result, Err(ClaimError::FutureExpenseDate { .. })));
}

#[tokio::test]
async fn resolved_claims_stay_resolved() {
    let world = world();
    let client_id = registered_client(&world, "10203046").await;
    let contract = health_contract(&world, client_id).await;
    activate(&world, &contract).await;

    let claim = world
        .claims
        .submit_claim(
            &Actor::client(client_id),
            contract.id,
            TestSubmissionBuilder::new().build(),
        )
        .await
        .unwrap();

    // Clients cannot review, not even their own claims
    let forbidden = world
        .claims
        .review_claim(&Actor::client(client_id), claim.id, ReviewDecision::Approve)
        .await;
    assert!(matches!(forbidden, Err(ClaimError::Forbidden(_))));

    let resolved = world
        .claims
        .review_claim(&Actor::agent(), claim.id, ReviewDecision::Approve)
        .await
        .unwrap();
    assert_eq!(resolved.status, ClaimStatus::Approved);
    assert!(resolved.resolved_at.is_some());

    let again = world
        .claims
        .review_claim(&Actor::admin(), claim.id, ReviewDecision::Reject)
        .await;
    assert!(matches!(again, Err(ClaimError::AlreadyResolved)));
}

#[tokio::test]
async fn concurrent_reviews_resolve_to_one_winner() {
    let world = world();
    let client_id = registered_client(&world, "10203047").await;
    let contract = health_contract(&world, client_id).await;
    activate(&world, &contract).await;

    let claim = world
        .claims
        .submit_claim(
            &Actor::client(client_id),
            contract.id,
            TestSubmissionBuilder::new().build(),
        )
        .await
        .unwrap();

    let approver = {
        let claims = world.claims.clone();
        let claim_id = claim.id;
        tokio::spawn(async move {
            claims
                .review_claim(&Actor::agent(), claim_id, ReviewDecision::Approve)
                .await
        })
    };
    let rejecter = {
        let claims = world.claims.clone();
        let claim_id = claim.id;
        tokio::spawn(async move {
            claims
                .review_claim(&Actor::admin(), claim_id, ReviewDecision::Reject)
                .await
        })
    };

    let outcomes = [approver.await.unwrap(), rejecter.await.unwrap()];
    let successes = outcomes.iter().filter(|r| r.is_ok()).count();
    let stale = outcomes
        .iter()
        .filter(|r| matches!(r, Err(ClaimError::AlreadyResolved)))
        .count();
    assert_eq!(successes, 1);
    assert_eq!(stale, 1);

    // The committed resolution is terminal
    let listed = world
        .claims
        .list_claims_for_client(&Actor::client(client_id), client_id)
        .await
        .unwrap();
    assert!(listed[0].status.is_terminal());
}

#[tokio::test]
async fn review_queue_is_stable_between_writes() {
    let world = world();
    let client_id = registered_client(&world, "10203048").await;
    let contract = health_contract(&world, client_id).await;
    activate(&world, &contract).await;

    for _ in 0..3 {
        world
            .claims
            .submit_claim(
                &Actor::client(client_id),
                contract.id,
                TestSubmissionBuilder::new().build(),
            )
            .await
            .unwrap();
    }

    let first = world.claims.list_claims_for_review(&Actor::agent()).await.unwrap();
    let second = world.claims.list_claims_for_review(&Actor::admin()).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    // Oldest first
    assert!(first.windows(2).all(|w| w[0].submitted_at <= w[1].submitted_at));
}

#[tokio::test]
async fn life_contracts_enforce_the_full_allocation() {
    let world = world();
    let client_id = registered_client(&world, "10203049").await;
    let actor = Actor::client(client_id);

    let partial: Vec<Beneficiary> = vec![
        TestBeneficiaryBuilder::new("20000001").with_percentage(70).build(),
        TestBeneficiaryBuilder::new("20000002").with_percentage(20).build(),
        TestBeneficiaryBuilder::new("20000003").with_percentage(5).build(),
    ];
    let result = world
        .contracts
        .create_contract(&actor, client_id, PlanType::Life, partial.clone())
        .await;
    assert!(matches!(result, Err(ContractError::InvalidBeneficiaries(_))));

    let mut complete = partial;
    complete.push(TestBeneficiaryBuilder::new("20000004").with_percentage(10).build());
    let contract = world
        .contracts
        .create_contract(&actor, client_id, PlanType::Life, complete)
        .await
        .unwrap();
    assert_eq!(contract.monthly_premium, MoneyFixtures::life_premium());
    assert_eq!(contract.beneficiaries.len(), 4);
}

#[tokio::test]
async fn clients_only_see_their_own_records() {
    let world = world();
    let owner = registered_client(&world, "10203050").await;
    let other = registered_client(&world, "10203051").await;
    let contract = health_contract(&world, owner).await;
    activate(&world, &contract).await;

    // Contract listings are forced onto the caller's own id
    let listed = world
        .contracts
        .list_contracts(&Actor::client(other), ContractFilter::default())
        .await
        .unwrap();
    assert!(listed.is_empty());

    // Claim history of another client is off limits
    let result = world
        .claims
        .list_claims_for_client(&Actor::client(other), owner)
        .await;
    assert!(matches!(result, Err(ClaimError::Forbidden(_))));

    // Payment listings are scoped the same way
    let payments = world
        .payments
        .list_payments(&Actor::client(other), PaymentFilter::default())
        .await
        .unwrap();
    assert!(payments.is_empty());
}

#[tokio::test]
async fn only_staff_move_contract_status() {
    let world = world();
    let client_id = registered_client(&world, "10203052").await;
    let contract = health_contract(&world, client_id).await;

    let result = world
        .contracts
        .update_contract_status(&Actor::client(client_id), contract.id, ContractStatus::Active)
        .await;
    assert!(matches!(result, Err(ContractError::Forbidden(_))));

    let updated = world
        .contracts
        .update_contract_status(&Actor::admin(), contract.id, ContractStatus::Active)
        .await
        .unwrap();
    assert_eq!(updated.status, ContractStatus::Active);

    // Expired is terminal
    let expired = world
        .contracts
        .update_contract_status(&Actor::admin(), contract.id, ContractStatus::Expired)
        .await
        .unwrap();
    assert_eq!(expired.status, ContractStatus::Expired);
    let result = world
        .contracts
        .update_contract_status(&Actor::admin(), contract.id, ContractStatus::Active)
        .await;
    assert!(matches!(result, Err(ContractError::InvalidStatusTransition { .. })));
}
