//! The device text format for settings: semicolon-separated `Key=[value]`
//! pairs, lossless for every field including the two focus representations.
//!
//! Serialization is [`core::fmt::Display`] on
//! [`AcousticSettings`]; parsing is [`core::str::FromStr`]. Distances are in
//! meters, durations in microseconds, rates in hertz.

use core::fmt;
use core::str::FromStr;

use aris_core::units::{Distance, FineDuration, Rate, Salinity};

use crate::{
    error::{ParseSettingsError, SettingsError},
    settings::{AcousticSettings, FocusPosition, Frequency, InterpacketDelay, SettingsParams},
    system::{PingMode, SystemType},
};

impl fmt::Display for AcousticSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SystemType=[{}];", self.system_type().wire_code())?;
        write!(f, "FrameRate=[{}];", self.frame_rate().hz())?;
        write!(f, "SampleCount=[{}];", self.sample_count())?;
        write!(
            f,
            "SampleStartDelay=[{}];",
            self.sample_start_delay().total_microseconds()
        )?;
        write!(
            f,
            "SamplePeriod=[{}];",
            self.sample_period().total_microseconds()
        )?;
        write!(
            f,
            "PulseWidth=[{}];",
            self.pulse_width().total_microseconds()
        )?;
        write!(f, "PingMode=[{}];", self.ping_mode().wire_code())?;
        write!(f, "EnableTransmit=[{}];", self.enable_transmit())?;
        write!(f, "Frequency=[{}];", self.frequency().as_str())?;
        write!(f, "Enable150Volts=[{}];", self.enable_150_volts())?;
        write!(f, "ReceiverGain=[{}];", self.receiver_gain())?;
        match self.focus_position() {
            FocusPosition::Distance(distance) => {
                write!(f, "FocusDistance=[{}];", distance.meters())?;
            }
            FocusPosition::MotorUnits(units) => write!(f, "FocusUnits=[{}];", units)?,
        }
        write!(
            f,
            "AntiAliasing=[{}];",
            self.anti_aliasing().total_microseconds()
        )?;
        write!(
            f,
            "InterpacketDelayEnable=[{}];",
            self.interpacket_delay().enabled()
        )?;
        write!(
            f,
            "InterpacketDelayPeriod=[{}];",
            self.interpacket_delay().delay().total_microseconds()
        )?;
        write!(f, "Salinity=[{}]", self.salinity().code())
    }
}

impl FromStr for AcousticSettings {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = Builder::default();
        for entry in s.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let (key, value) = entry
                .split_once("=[")
                .and_then(|(key, rest)| rest.strip_suffix(']').map(|value| (key, value)))
                .ok_or_else(|| ParseSettingsError::MalformedEntry(entry.to_string()))?;
            builder.set(key, value)?;
        }
        AcousticSettings::new(builder.finish()?)
    }
}

#[derive(Default)]
struct Builder {
    system_type: Option<SystemType>,
    frame_rate: Option<Rate>,
    sample_count: Option<u32>,
    sample_start_delay: Option<FineDuration>,
    sample_period: Option<FineDuration>,
    pulse_width: Option<FineDuration>,
    ping_mode: Option<PingMode>,
    enable_transmit: Option<bool>,
    enable_150_volts: Option<bool>,
    frequency: Option<Frequency>,
    receiver_gain: Option<u32>,
    focus_distance: Option<Distance>,
    focus_units: Option<u16>,
    anti_aliasing: Option<FineDuration>,
    interpacket_delay_enable: Option<bool>,
    interpacket_delay_period: Option<FineDuration>,
    salinity: Option<Salinity>,
}

fn store<T>(slot: &mut Option<T>, key: &'static str, value: T) -> Result<(), ParseSettingsError> {
    if slot.is_some() {
        return Err(ParseSettingsError::DuplicateKey(key));
    }
    *slot = Some(value);
    Ok(())
}

fn invalid(key: &'static str, value: &str) -> ParseSettingsError {
    ParseSettingsError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_f64(key: &'static str, value: &str) -> Result<f64, ParseSettingsError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_u32(key: &'static str, value: &str) -> Result<u32, ParseSettingsError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ParseSettingsError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn require<T>(slot: Option<T>, key: &'static str) -> Result<T, ParseSettingsError> {
    slot.ok_or(ParseSettingsError::MissingField(key))
}

impl Builder {
    fn set(&mut self, key: &str, value: &str) -> Result<(), ParseSettingsError> {
        match key {
            "SystemType" => {
                let system_type = SystemType::try_from(parse_u32("SystemType", value)?)
                    .map_err(|_| invalid("SystemType", value))?;
                store(&mut self.system_type, "SystemType", system_type)
            }
            "FrameRate" => store(
                &mut self.frame_rate,
                "FrameRate",
                Rate::from_hz(parse_f64("FrameRate", value)?),
            ),
            "SampleCount" => store(
                &mut self.sample_count,
                "SampleCount",
                parse_u32("SampleCount", value)?,
            ),
            "SampleStartDelay" => store(
                &mut self.sample_start_delay,
                "SampleStartDelay",
                FineDuration::from_microseconds(parse_f64("SampleStartDelay", value)?),
            ),
            "SamplePeriod" => store(
                &mut self.sample_period,
                "SamplePeriod",
                FineDuration::from_microseconds(parse_f64("SamplePeriod", value)?),
            ),
            "PulseWidth" => store(
                &mut self.pulse_width,
                "PulseWidth",
                FineDuration::from_microseconds(parse_f64("PulseWidth", value)?),
            ),
            "PingMode" => {
                let ping_mode = PingMode::try_from(parse_u32("PingMode", value)?)
                    .map_err(|_| invalid("PingMode", value))?;
                store(&mut self.ping_mode, "PingMode", ping_mode)
            }
            "EnableTransmit" => store(
                &mut self.enable_transmit,
                "EnableTransmit",
                parse_bool("EnableTransmit", value)?,
            ),
            "Frequency" => {
                let frequency = match value {
                    "High" => Frequency::High,
                    "Low" => Frequency::Low,
                    _ => return Err(invalid("Frequency", value)),
                };
                store(&mut self.frequency, "Frequency", frequency)
            }
            "Enable150Volts" => store(
                &mut self.enable_150_volts,
                "Enable150Volts",
                parse_bool("Enable150Volts", value)?,
            ),
            "ReceiverGain" => store(
                &mut self.receiver_gain,
                "ReceiverGain",
                parse_u32("ReceiverGain", value)?,
            ),
            "FocusDistance" => store(
                &mut self.focus_distance,
                "FocusDistance",
                Distance::from_meters(parse_f64("FocusDistance", value)?),
            ),
            "FocusUnits" => store(
                &mut self.focus_units,
                "FocusUnits",
                value.parse().map_err(|_| invalid("FocusUnits", value))?,
            ),
            "AntiAliasing" => store(
                &mut self.anti_aliasing,
                "AntiAliasing",
                FineDuration::from_microseconds(parse_f64("AntiAliasing", value)?),
            ),
            "InterpacketDelayEnable" => store(
                &mut self.interpacket_delay_enable,
                "InterpacketDelayEnable",
                parse_bool("InterpacketDelayEnable", value)?,
            ),
            "InterpacketDelayPeriod" => store(
                &mut self.interpacket_delay_period,
                "InterpacketDelayPeriod",
                FineDuration::from_microseconds(parse_f64("InterpacketDelayPeriod", value)?),
            ),
            "Salinity" => {
                let salinity = Salinity::try_from(parse_u32("Salinity", value)?)
                    .map_err(|_| invalid("Salinity", value))?;
                store(&mut self.salinity, "Salinity", salinity)
            }
            _ => Err(ParseSettingsError::UnknownKey(key.to_string())),
        }
    }

    fn finish(self) -> Result<SettingsParams, SettingsError> {
        let focus_position = FocusPosition::try_new(self.focus_distance, self.focus_units)?;
        Ok(SettingsParams {
            system_type: require(self.system_type, "SystemType")?,
            frame_rate: require(self.frame_rate, "FrameRate")?,
            sample_count: require(self.sample_count, "SampleCount")?,
            sample_start_delay: require(self.sample_start_delay, "SampleStartDelay")?,
            sample_period: require(self.sample_period, "SamplePeriod")?,
            pulse_width: require(self.pulse_width, "PulseWidth")?,
            ping_mode: require(self.ping_mode, "PingMode")?,
            enable_transmit: require(self.enable_transmit, "EnableTransmit")?,
            enable_150_volts: require(self.enable_150_volts, "Enable150Volts")?,
            frequency: require(self.frequency, "Frequency")?,
            receiver_gain: require(self.receiver_gain, "ReceiverGain")?,
            focus_position,
            anti_aliasing: require(self.anti_aliasing, "AntiAliasing")?,
            interpacket_delay: InterpacketDelay::new(
                require(self.interpacket_delay_enable, "InterpacketDelayEnable")?,
                require(self.interpacket_delay_period, "InterpacketDelayPeriod")?,
            ),
            salinity: require(self.salinity, "Salinity")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_defaults() {
        for system_type in SystemType::ALL {
            let settings = AcousticSettings::default_for(system_type);
            let text = settings.to_string();
            let parsed: AcousticSettings = text.parse().unwrap();
            assert_eq!(settings, parsed);
        }
    }

    #[test]
    fn round_trip_motor_units_focus() {
        let settings = AcousticSettings::default_for(SystemType::Aris3000)
            .with_focus_position(FocusPosition::MotorUnits(420));
        let parsed: AcousticSettings = settings.to_string().parse().unwrap();
        assert_eq!(settings, parsed);
        assert_eq!(Some(420), parsed.focus_position().motor_units());
    }

    #[test]
    fn round_trip_interpacket_delay() {
        let settings = AcousticSettings::default_for(SystemType::Aris1800)
            .with_interpacket_delay(InterpacketDelay::new(
                true,
                FineDuration::from_microseconds(250.5),
            ));
        let parsed: AcousticSettings = settings.to_string().parse().unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let text = "SystemType=[1];Bogus=[1]";
        assert!(matches!(
            text.parse::<AcousticSettings>(),
            Err(SettingsError::Parse(ParseSettingsError::UnknownKey(_)))
        ));
    }

    #[test]
    fn malformed_entry_is_rejected() {
        assert!(matches!(
            "SystemType=1".parse::<AcousticSettings>(),
            Err(SettingsError::Parse(ParseSettingsError::MalformedEntry(_)))
        ));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let text = "SampleCount=[1000];SampleCount=[1200]";
        assert!(matches!(
            text.parse::<AcousticSettings>(),
            Err(SettingsError::Parse(ParseSettingsError::DuplicateKey(
                "SampleCount"
            )))
        ));
    }

    #[test]
    fn missing_field_is_rejected() {
        let settings = AcousticSettings::default_for(SystemType::Aris3000);
        let text = settings
            .to_string()
            .replace("SampleCount=[1250];", "");
        assert_eq!(
            Err(SettingsError::Parse(ParseSettingsError::MissingField(
                "SampleCount"
            ))),
            text.parse::<AcousticSettings>()
        );
    }

    #[test]
    fn both_focus_fields_are_rejected() {
        let settings = AcousticSettings::default_for(SystemType::Aris3000);
        let text = settings
            .to_string()
            .replace("FocusDistance=[", "FocusUnits=[77];FocusDistance=[");
        assert_eq!(
            Err(SettingsError::AmbiguousFocusPosition),
            text.parse::<AcousticSettings>()
        );
    }
}
