//! Checkout: totals, validation, and the external messaging handoff.
//!
//! Checkout does not call an API. It validates the customer snapshot,
//! computes the ITBIS totals, and builds the URL the browser navigates to so
//! the order reaches the store over the external messaging service. There is
//! no response contract and no confirmation the message was sent.

use thiserror::Error;
use url::Url;

use vitrina_core::{CartItem, CustomerInfo, OrderTotals};

/// Errors surfaced at checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required customer field is empty.
    #[error("missing required checkout field: {0}")]
    MissingField(&'static str),

    /// The cart is empty, so there is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The configured handoff base URL does not parse.
    #[error("invalid handoff URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Check the customer snapshot has every required field.
///
/// # Errors
///
/// Returns [`CheckoutError::MissingField`] naming the first empty field.
pub fn validate_customer_info(info: &CustomerInfo) -> Result<(), CheckoutError> {
    if info.name.trim().is_empty() {
        return Err(CheckoutError::MissingField("name"));
    }
    if info.phone.trim().is_empty() {
        return Err(CheckoutError::MissingField("phone"));
    }
    if info.address.trim().is_empty() {
        return Err(CheckoutError::MissingField("address"));
    }
    if info.email.trim().is_empty() {
        return Err(CheckoutError::MissingField("email"));
    }
    Ok(())
}

/// Compute ITBIS totals for the cart.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart.
pub fn cart_totals(items: &[CartItem]) -> Result<OrderTotals, CheckoutError> {
    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    Ok(OrderTotals::from_items(items))
}

/// Build the handoff URL: `base?phone=<phone>&text=<message>`.
///
/// The message text is taken as already formatted; composing it is a
/// presentation concern.
///
/// # Errors
///
/// Returns [`CheckoutError::Url`] when `base` is not a valid URL.
pub fn handoff_url(base: &str, phone: &str, message: &str) -> Result<Url, CheckoutError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("phone", phone)
        .append_pair("text", message);
    Ok(url)
}
