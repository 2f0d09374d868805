// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Financing quotation arithmetic.
//!
//! Flat-rate amortization: interest accrues on the loan principal at a fixed
//! annual rate for the whole term, with equal monthly payments.

/// Flat annual interest rate applied to the loan amount.
pub const FLAT_ANNUAL_RATE: f64 = 0.05;

/// Default downpayment fraction when the caller specifies none.
pub const DEFAULT_DOWNPAYMENT_PERCENT: f64 = 0.20;

/// Default loan term in years when the caller specifies none.
pub const DEFAULT_TERM_YEARS: u32 = 5;

/// One computed financing quotation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub price: i64,
    pub downpayment_percent: f64,
    pub years: u32,
    pub downpayment: f64,
    pub loan_amount: f64,
    pub total_interest: f64,
    pub monthly_payment: f64,
}

impl QuoteBreakdown {
    /// Computes a quotation for the given retail price.
    ///
    /// `downpayment = price * percent`, `loan = price - downpayment`,
    /// `interest = loan * FLAT_ANNUAL_RATE * years`,
    /// `monthly = (loan + interest) / (years * 12)`.
    pub fn compute(price: i64, downpayment_percent: f64, years: u32) -> Self {
        let price_f = price as f64;
        let downpayment = price_f * downpayment_percent;
        let loan_amount = price_f - downpayment;
        let total_interest = loan_amount * FLAT_ANNUAL_RATE * years as f64;
        let monthly_payment = (loan_amount + total_interest) / (years as f64 * 12.0);
        Self {
            price,
            downpayment_percent,
            years,
            downpayment,
            loan_amount,
            total_interest,
            monthly_payment,
        }
    }
}
