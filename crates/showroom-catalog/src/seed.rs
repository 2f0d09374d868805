// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The seeded demonstration inventory.

use showroom_core::types::{CarModel, CarSpecs};

/// Builds the demonstration car lineup.
pub fn seed_models() -> Vec<CarModel> {
    vec![
        CarModel {
            id: "car_xpander_gls".into(),
            name: "Mitsubishi Xpander GLS".into(),
            price: 1_266_000,
            body_type: "MPV".into(),
            description: "The reliable 7-seater MPV perfect for families, featuring a bold dynamic shield design.".into(),
            image_url: "https://placehold.co/600x400?text=Mitsubishi+Xpander".into(),
            specs: CarSpecs {
                engine: "1.5L MIVEC DOHC 16-Valve".into(),
                transmission: "4-Speed Automatic".into(),
                seating_capacity: 7,
                fuel_type: "Gasoline".into(),
                power: "104 PS @ 6000 rpm".into(),
                torque: "141 Nm @ 4000 rpm".into(),
            },
        },
        CarModel {
            id: "car_montero_gt".into(),
            name: "Mitsubishi Montero Sport GT v2".into(),
            price: 2_428_000,
            body_type: "SUV".into(),
            description: "A premium SUV that combines power, luxury, and advanced safety features.".into(),
            image_url: "https://placehold.co/600x400?text=Montero+Sport".into(),
            specs: CarSpecs {
                engine: "2.4L MIVEC Diesel".into(),
                transmission: "8-Speed Automatic".into(),
                seating_capacity: 7,
                fuel_type: "Diesel".into(),
                power: "181 PS @ 3500 rpm".into(),
                torque: "430 Nm @ 2500 rpm".into(),
            },
        },
        CarModel {
            id: "car_mirage_g4".into(),
            name: "Mitsubishi Mirage G4 GLS".into(),
            price: 934_000,
            body_type: "Sedan".into(),
            description: "Practical, fuel-efficient, and stylish sedan for city driving.".into(),
            image_url: "https://placehold.co/600x400?text=Mirage+G4".into(),
            specs: CarSpecs {
                engine: "1.2L MIVEC DOHC 12-Valve".into(),
                transmission: "CVT".into(),
                seating_capacity: 5,
                fuel_type: "Gasoline".into(),
                power: "78 PS @ 6000 rpm".into(),
                torque: "100 Nm @ 4000 rpm".into(),
            },
        },
        CarModel {
            id: "car_triton_athlete".into(),
            name: "Mitsubishi Triton Athlete 4WD".into(),
            price: 1_956_000,
            body_type: "Pickup".into(),
            description: "Tough, durable, and ready for any adventure or heavy-duty task.".into(),
            image_url: "https://placehold.co/600x400?text=Triton+Athlete".into(),
            specs: CarSpecs {
                engine: "2.4L Bi-Turbo Diesel".into(),
                transmission: "6-Speed Automatic".into(),
                seating_capacity: 5,
                fuel_type: "Diesel".into(),
                power: "204 PS @ 3500 rpm".into(),
                torque: "470 Nm @ 1500-2750 rpm".into(),
            },
        },
    ]
}
