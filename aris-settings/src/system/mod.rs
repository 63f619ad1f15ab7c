mod configuration;
mod ping_mode;
mod system_type;

pub use configuration::{
    FrequencyCrossover, PulseWidthLine, SamplePeriodLine, SystemConfiguration, WindowPreset,
};
pub use ping_mode::PingMode;
pub use system_type::SystemType;
