//! Journeys ofrecidos por la capa de UI
//!
//! El servidor es la fuente de verdad sobre la validez de journey/status;
//! estos valores solo enumeran lo que el cliente ofrece normalmente. Los
//! valores no reconocidos que llegan del servidor se quedan como strings
//! planos en las entidades.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Journeys conocidos por el cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Journey {
    #[default]
    Flycruise,
    Oaci,
    Departure,
    TerminalTransfer,
}

impl Journey {
    pub const ALL: [Journey; 4] = [
        Journey::Flycruise,
        Journey::Oaci,
        Journey::Departure,
        Journey::TerminalTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Journey::Flycruise => "FLYCRUISE",
            Journey::Oaci => "OACI",
            Journey::Departure => "DEPARTURE",
            Journey::TerminalTransfer => "TERMINAL_TRANSFER",
        }
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status inicial por defecto al arrancar un journey
pub const STATUS_EXPECTED: &str = "EXPECTED";

/// Status ofrecido para equipaje aprobado para transporte
pub const STATUS_APPROVED_FOR_TRANSPORT: &str = "APPROVED_FOR_TRANSPORT";

/// Statuses que el formulario ofrece por defecto
pub const STATUS_OPTIONS: [&str; 2] = [STATUS_EXPECTED, STATUS_APPROVED_FOR_TRANSPORT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journey_wire_names() {
        assert_eq!(Journey::Flycruise.as_str(), "FLYCRUISE");
        assert_eq!(Journey::TerminalTransfer.as_str(), "TERMINAL_TRANSFER");
        assert_eq!(
            serde_json::to_value(Journey::Oaci).unwrap(),
            serde_json::json!("OACI")
        );
    }

    #[test]
    fn test_default_journey_is_flycruise() {
        assert_eq!(Journey::default(), Journey::Flycruise);
    }
}
