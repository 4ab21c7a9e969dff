//! Payment ledger service

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use core_kernel::{Actor, ContractId, FileReference, Money, PaymentId, PortError};
use domain_billing::error::PaymentError;
use domain_billing::payment::{Payment, PaymentFilter, PaymentStatus};
use domain_billing::ports::PaymentStore;
use domain_contract::contract::ContractStatus;
use domain_contract::ports::ContractStore;

/// Records premium payments and drives contract activation
pub struct PaymentService {
    payments: Arc<dyn PaymentStore>,
    contracts: Arc<dyn ContractStore>,
}

impl PaymentService {
    pub fn new(payments: Arc<dyn PaymentStore>, contracts: Arc<dyn ContractStore>) -> Self {
        Self { payments, contracts }
    }

    /// Records a premium payment awaiting staff approval
    ///
    /// The amount must match the contract's monthly premium exactly and a
    /// proof document is mandatory.
    #[instrument(skip(self, proof))]
    pub async fn record_payment(
        &self,
        actor: &Actor,
        contract_id: ContractId,
        amount: Money,
        paid_at: NaiveDate,
        proof: Option<FileReference>,
    ) -> Result<Payment, PaymentError> {
        let contract = self.contracts.get(contract_id).await.map_err(|err| match err {
            PortError::NotFound { id, .. } => PaymentError::NotFound(id),
            other => PaymentError::Store(other.to_string()),
        })?;

        if !actor.may_act_for(contract.client_id) {
            return Err(PaymentError::Forbidden(actor.role));
        }

        let payment = Payment::record(
            contract_id,
            contract.client_id,
            amount,
            paid_at,
            proof,
            contract.monthly_premium,
        )?;
        self.payments.insert(payment.clone()).await?;
        info!(payment_id = %payment.id, amount = %payment.amount, "payment recorded");
        Ok(payment)
    }

    /// Approves a pending payment, staff only
    ///
    /// Approval commits against the Pending status read here, so racing
    /// approvals apply exactly one state change. The contract's first
    /// approved payment activates it; a contract already activated by a
    /// concurrent approval is left as found.
    #[instrument(skip(self))]
    pub async fn approve_payment(
        &self,
        actor: &Actor,
        payment_id: PaymentId,
    ) -> Result<Payment, PaymentError> {
        let mut payment = self.payments.get(payment_id).await?;
        let observed = payment.status;
        payment.approve(actor.role)?;
        self.payments.update(payment.clone(), observed).await?;
        info!(payment_id = %payment_id, "payment approved");

        self.activate_contract_if_pending(payment.contract_id).await?;
        Ok(payment)
    }

    /// Lists payments, scoped to the caller
    pub async fn list_payments(
        &self,
        actor: &Actor,
        mut filter: PaymentFilter,
    ) -> Result<Vec<Payment>, PaymentError> {
        if !actor.role.can_read_all() {
            match actor.client_id {
                Some(own_id) => filter.client_id = Some(own_id),
                None => return Err(PaymentError::Forbidden(actor.role)),
            }
        }
        Ok(self.payments.list(filter).await?)
    }

    async fn activate_contract_if_pending(
        &self,
        contract_id: ContractId,
    ) -> Result<(), PaymentError> {
        let mut contract = match self.contracts.get(contract_id).await {
            Ok(contract) => contract,
            Err(err) => return Err(PaymentError::Store(err.to_string())),
        };
        if contract.status != ContractStatus::Pending {
            return Ok(());
        }

        if contract.activate().is_err() {
            return Ok(());
        }
        match self
            .contracts
            .update(contract, ContractStatus::Pending)
            .await
        {
            Ok(()) => {
                info!(contract_id = %contract_id, "contract activated by first payment");
                Ok(())
            }
            // A concurrent approval already activated the contract.
            Err(PortError::StaleState { .. }) => {
                warn!(contract_id = %contract_id, "contract activated concurrently");
                Ok(())
            }
            Err(other) => Err(PaymentError::Store(other.to_string())),
        }
    }
}
