//! The pattern families of the rule engine.

pub mod arinc;
pub mod bus_analyser;
pub mod bus_protocol;
pub mod inspect;
pub mod keys;
pub mod power;
pub mod test_rig;
pub mod wait;

pub use arinc::ArincRule;
pub use bus_analyser::BusAnalyserRule;
pub use bus_protocol::BusProtocolRule;
pub use inspect::InspectRule;
pub use keys::KeyRule;
pub use power::PowerRule;
pub use test_rig::TestRigRule;
pub use wait::WaitRule;

use crate::engine::Translator;

/// All translators in dispatch order.
///
/// Order matters for rows matched by more than one family: later outputs
/// overwrite earlier ones, so the sequence is part of the output contract.
pub fn default_translators() -> Vec<Box<dyn Translator>> {
    vec![
        Box::new(InspectRule),
        Box::new(TestRigRule),
        Box::new(BusAnalyserRule),
        Box::new(PowerRule),
        Box::new(WaitRule),
        Box::new(ArincRule),
        Box::new(BusProtocolRule),
        Box::new(KeyRule),
    ]
}
