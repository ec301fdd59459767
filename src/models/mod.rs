pub mod attributions;
pub mod daily_observation;
pub mod geography;
pub mod identifiers;
pub mod observation;
pub mod station;

pub use attributions::Attributions;
pub use daily_observation::DailyObservation;
pub use geography::Geography;
pub use identifiers::Identifiers;
pub use observation::Observation;
pub use station::Station;
