// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rich message rendering: gallery cards, details, quotations, confirmations.

use showroom_booking::dates::format_appointment_date_time;
use showroom_catalog::QuoteBreakdown;
use showroom_core::types::{Appointment, CarModel, CardButton, CarouselCard, QuickReply};

use crate::postback;

/// Length budget for gallery card subtitles.
const SUBTITLE_DESCRIPTION_CHARS: usize = 60;

/// Formats a whole-peso amount with thousands separators.
pub fn format_pesos(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-₱{grouped}")
    } else {
        format!("₱{grouped}")
    }
}

/// Gallery cards for the full lineup, one card per model.
pub fn gallery_cards(cars: &[CarModel]) -> Vec<CarouselCard> {
    cars.iter()
        .map(|car| {
            let description: String = car
                .description
                .chars()
                .take(SUBTITLE_DESCRIPTION_CHARS)
                .collect();
            CarouselCard {
                title: car.name.clone(),
                subtitle: format!("{}\n{description}...", format_pesos(car.price)),
                image_url: car.image_url.clone(),
                buttons: vec![
                    CardButton {
                        title: "View Specs".into(),
                        payload: postback::details_payload(&car.id),
                    },
                    CardButton {
                        title: "Get Quote".into(),
                        payload: postback::quote_payload(&car.id),
                    },
                    CardButton {
                        title: "Book Test Drive".into(),
                        payload: postback::test_drive_payload(&car.id),
                    },
                ],
            }
        })
        .collect()
}

/// A single rich card with one model's key figures.
pub fn details_card(car: &CarModel) -> CarouselCard {
    CarouselCard {
        title: car.name.clone(),
        subtitle: format!(
            "{} | {} | {} | {} seats",
            format_pesos(car.price),
            car.specs.engine,
            car.specs.transmission,
            car.specs.seating_capacity
        ),
        image_url: car.image_url.clone(),
        buttons: vec![
            CardButton {
                title: "Get Quotation".into(),
                payload: postback::quote_payload(&car.id),
            },
            CardButton {
                title: "Book Test Drive".into(),
                payload: postback::test_drive_payload(&car.id),
            },
        ],
    }
}

/// The quotation message body.
pub fn quotation_text(car: &CarModel, quote: &QuoteBreakdown) -> String {
    format!(
        "Quotation for {name}\n\n\
         SRP: {srp}\n\
         --------\n\
         Downpayment ({dp_pct}%): {dp}\n\
         Loan Amount: {loan}\n\
         Term: {years} Years\n\n\
         Monthly Amortization (Est.):\n\
         {monthly} / month\n\n\
         Note: This is an estimated computation. Subject to bank approval.\n\n\
         Would you like to schedule a test drive?",
        name = car.name,
        srp = format_pesos(car.price),
        dp_pct = (quote.downpayment_percent * 100.0).round() as i64,
        dp = format_pesos(quote.downpayment.round() as i64),
        loan = format_pesos(quote.loan_amount.round() as i64),
        years = quote.years,
        monthly = format_pesos(quote.monthly_payment.round() as i64),
    )
}

/// Quick replies attached to a quotation.
pub fn quotation_quick_replies(car: &CarModel) -> Vec<QuickReply> {
    vec![
        QuickReply {
            title: "Yes, Test Drive".into(),
            payload: postback::test_drive_payload(&car.id),
        },
        QuickReply {
            title: "Check other cars".into(),
            payload: postback::SHOW_GALLERY_PAYLOAD.into(),
        },
    ]
}

/// Yes/no quick replies for guided questions.
pub fn yes_no_replies() -> Vec<QuickReply> {
    vec![
        QuickReply {
            title: "Yes".into(),
            payload: "YES".into(),
        },
        QuickReply {
            title: "No".into(),
            payload: "NO".into(),
        },
    ]
}

/// The booking confirmation message.
pub fn confirmation_text(appointment: &Appointment) -> String {
    format!(
        "✅ Test Drive Confirmed!\n\n\
         Reference: {id}\n\
         Car: {car}\n\
         Date & Time: {when}\n\
         Customer: {name}\n\
         Phone: {phone}\n\n\
         Please visit our dealership 15 minutes before your schedule. \
         Don't forget your driver's license!",
        id = appointment.id,
        car = appointment.car.name,
        when = format_appointment_date_time(appointment.date_time),
        name = appointment.customer.name,
        phone = appointment.customer.phone,
    )
}
