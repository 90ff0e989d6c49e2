//! CreateOrderHandler - Command handler for minting a gateway order.

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::payment::{CheckoutError, Currency, MinorUnits, Order, OrderDraft, PaymentEvent};
use crate::ports::{PaymentEventPublisher, PaymentGateway};

/// Message returned when either input is absent.
pub const AMOUNT_AND_CURRENCY_REQUIRED: &str = "Amount and currency are required.";

/// Command to create an order for a client-entered amount.
#[derive(Debug, Clone, Default)]
pub struct CreateOrderCommand {
    /// Amount in major units, as the client typed it.
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
}

/// Result of successful order creation.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    /// The order as the gateway recorded it.
    pub order: Order,
    /// Receipt token the order was requested with.
    pub receipt: String,
}

/// Handler for order creation.
///
/// Validates and converts the client's input, then asks the gateway to mint
/// the order. The gateway's amount and currency are returned, never the
/// client's.
pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
    event_publisher: Arc<dyn PaymentEventPublisher>,
}

impl CreateOrderHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        event_publisher: Arc<dyn PaymentEventPublisher>,
    ) -> Self {
        Self {
            gateway,
            event_publisher,
        }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, CheckoutError> {
        // 1. Both inputs must be present
        let amount = cmd
            .amount
            .ok_or_else(|| CheckoutError::validation("amount", AMOUNT_AND_CURRENCY_REQUIRED))?;
        let currency = cmd
            .currency
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| CheckoutError::validation("currency", AMOUNT_AND_CURRENCY_REQUIRED))?;

        // 2. Convert to gateway units
        let amount = MinorUnits::from_major(amount)?;
        let currency = Currency::parse(&currency)?;

        // 3. Mint the order
        let draft = OrderDraft::new(amount, currency);
        let order = self.gateway.create_order(&draft).await.map_err(|e| {
            tracing::error!(
                code = %e.code,
                error = %e.message,
                receipt = %draft.receipt,
                "Order creation failed"
            );
            CheckoutError::from(e)
        })?;

        // 4. Publish; failure here does not undo the order
        let event = PaymentEvent::OrderCreated {
            order_id: order.id.clone(),
            amount: order.amount,
            currency: order.currency.clone(),
            receipt: draft.receipt.to_string(),
            occurred_at: Timestamp::now(),
        };
        if let Err(e) = self.event_publisher.publish(event).await {
            tracing::warn!(order_id = %order.id, error = %e, "Failed to publish order event");
        }

        Ok(CreateOrderResult {
            order,
            receipt: draft.receipt.to_string(),
        })
    }
}
