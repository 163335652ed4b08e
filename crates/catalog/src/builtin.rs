use academy_core::constants::{MARS_GRAVITY_M_S2, MOON_GRAVITY_M_S2, REFERENCE_GRAVITY_M_S2};

use crate::{Level, Part};

const ENGINE_FACT: &str = "The Thrust Engine generates force (thrust) by burning propellant. This is the only way to escape Earth's gravity.";
const FUEL_MODULE_FACT: &str = "The Fuel Module stores large amounts of liquid or solid propellant. It is the longest part of the rocket.";
const CONE_FACT: &str = "The Aerodynamic Cone has a pointed shape to minimize air resistance (drag), which allows the rocket to fly faster!";

fn part(id: &str, name: &str, required_order: u32, mass: f64, fact: Option<String>) -> Part {
    Part {
        id: id.to_string(),
        name: name.to_string(),
        required_order,
        mass,
        fact,
    }
}

fn engine(mass: f64, variant: &str) -> Part {
    part(
        "engine",
        "Thrust Engine (E1)",
        1,
        mass,
        Some(format!("{ENGINE_FACT} ({variant})")),
    )
}

fn fuel_module(mass: f64, variant: &str) -> Part {
    part(
        "body",
        "Fuel Module (M1)",
        3,
        mass,
        Some(format!("{FUEL_MODULE_FACT} ({variant})")),
    )
}

fn cone(required_order: u32, mass: f64, variant: Option<&str>) -> Part {
    let fact = match variant {
        Some(variant) => format!("{CONE_FACT} ({variant})"),
        None => CONE_FACT.to_string(),
    };
    part("nose", "Aerodynamic Cone (C1)", required_order, mass, Some(fact))
}

/// Levels already sorted by ordinal with parts sorted by required order.
pub(crate) fn levels() -> Vec<Level> {
    vec![
        Level {
            level: 1,
            name: "Basic Mission (4 Parts)".to_string(),
            description: "Simple 4-piece assembly to reach a low orbit.".to_string(),
            target: "Basic Orbit".to_string(),
            planet: "Earth".to_string(),
            gravity: REFERENCE_GRAVITY_M_S2,
            astronauts: 0,
            required_parts: vec![
                part("p1", "Part 1", 1, 100.0, None),
                part("p2", "Part 2", 2, 100.0, None),
                part("p3", "Part 3", 3, 100.0, None),
                part("p4", "Part 4", 4, 100.0, None),
            ],
            reward: 5,
        },
        Level {
            level: 2,
            name: "Geostationary Satellite Delivery (GEO)".to_string(),
            description: "Add a payload to reach geostationary orbit.".to_string(),
            target: "Geostationary Orbit (GEO)".to_string(),
            planet: "Earth".to_string(),
            gravity: REFERENCE_GRAVITY_M_S2,
            astronauts: 0,
            required_parts: vec![
                engine(350.0, "High Efficiency Engine"),
                part(
                    "payload",
                    "Payload/Satellite (P1)",
                    2,
                    250.0,
                    Some("The Payload is the object the rocket carries into space. A GEO satellite requires a lot of energy to reach its final orbit.".to_string()),
                ),
                cone(3, 100.0, None),
            ],
            reward: 25,
        },
        Level {
            level: 3,
            name: "Crewed Moon Mission".to_string(),
            description: "Complex assembly to carry humans to the Moon.".to_string(),
            target: "Moon".to_string(),
            planet: "Moon".to_string(),
            gravity: MOON_GRAVITY_M_S2,
            astronauts: 3,
            required_parts: vec![
                engine(400.0, "Main Stage Engine"),
                part(
                    "booster",
                    "Auxiliary Rockets (B1)",
                    2,
                    350.0,
                    Some("The Auxiliary Rockets (Boosters) detach to reduce weight, but add initial mass to the rocket.".to_string()),
                ),
                fuel_module(500.0, "Large Transfer Tank"),
                part(
                    "crew",
                    "Crew Capsule (T1)",
                    4,
                    500.0,
                    Some("The Crew Capsule houses 3 astronauts. Remember, each astronaut adds extra weight!".to_string()),
                ),
                part(
                    "command",
                    "Command Module (M2)",
                    5,
                    200.0,
                    Some("The Command Module is the rocket's \"brain\", housing the flight computer and navigation.".to_string()),
                ),
            ],
            reward: 50,
        },
        Level {
            level: 4,
            name: "Mars Mission".to_string(),
            description: "Final challenge to build a multi-stage rocket for Mars.".to_string(),
            target: "Mars".to_string(),
            planet: "Mars".to_string(),
            gravity: MARS_GRAVITY_M_S2,
            astronauts: 4,
            required_parts: vec![
                engine(450.0, "Ionic Engine"),
                part(
                    "fuel_stage_1",
                    "Propellant Stage (P1)",
                    2,
                    500.0,
                    Some("The Propellant Stage is the first of several. The concept of multi-stage rockets is key for missions to Mars.".to_string()),
                ),
                fuel_module(500.0, "Large Intermediate Tank"),
                part(
                    "habitat",
                    "Habitat Module",
                    4,
                    600.0,
                    Some("The Habitat Module contains provisions and living space for 4 astronauts. It is the heaviest piece.".to_string()),
                ),
                cone(5, 100.0, Some("Heat Shield Cone")),
            ],
            reward: 100,
        },
    ]
}
