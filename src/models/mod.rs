pub mod confidence;
pub mod day_record;
pub mod employee;
pub mod payload;
pub mod validation;
pub mod weekday;
pub mod work_period;

pub use confidence::{ConfidenceLevel, ConfidenceMap, DayConfidence};
pub use day_record::DayRecord;
pub use employee::Employee;
pub use payload::ExtractionPayload;
pub use validation::ValidationInfo;
pub use weekday::WeekdayCode;
pub use work_period::WorkPeriod;
