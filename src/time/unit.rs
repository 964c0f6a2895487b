use std::{fmt, str::FromStr};

use crate::foundation::core::Fps;
use crate::foundation::error::{AccelPathError, AccelPathResult};

macro_rules! time_units {
    ($($(#[$doc:meta])* $variant:ident => $id:literal, $num:literal / $den:literal;)*) => {
        /// Host time-unit setting, resolved to an exact frame rate.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TimeUnit {
            $($(#[$doc])* $variant,)*
        }

        impl TimeUnit {
            /// Every supported unit, in table order.
            pub const ALL: &'static [TimeUnit] = &[$(TimeUnit::$variant,)*];

            /// Host identifier for this unit (for example `"film"` or `"29.97df"`).
            pub fn identifier(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)*
                }
            }

            /// Exact frame rate for this unit.
            pub fn fps(self) -> Fps {
                match self {
                    $(Self::$variant => Fps { num: $num, den: $den },)*
                }
            }

            /// Look up a unit by host identifier.
            pub fn from_identifier(id: &str) -> Option<Self> {
                match id {
                    $($id => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

time_units! {
    /// 15 fps.
    Game => "game", 15 / 1;
    /// 24 fps.
    Film => "film", 24 / 1;
    /// 25 fps.
    Pal => "pal", 25 / 1;
    /// 30 fps.
    Ntsc => "ntsc", 30 / 1;
    /// 48 fps.
    Show => "show", 48 / 1;
    /// 50 fps.
    PalField => "palf", 50 / 1;
    /// 60 fps.
    NtscField => "ntscf", 60 / 1;
    /// 2 fps.
    Fps2 => "2fps", 2 / 1;
    /// 3 fps.
    Fps3 => "3fps", 3 / 1;
    /// 4 fps.
    Fps4 => "4fps", 4 / 1;
    /// 5 fps.
    Fps5 => "5fps", 5 / 1;
    /// 6 fps.
    Fps6 => "6fps", 6 / 1;
    /// 8 fps.
    Fps8 => "8fps", 8 / 1;
    /// 10 fps.
    Fps10 => "10fps", 10 / 1;
    /// 12 fps.
    Fps12 => "12fps", 12 / 1;
    /// 16 fps.
    Fps16 => "16fps", 16 / 1;
    /// 20 fps.
    Fps20 => "20fps", 20 / 1;
    /// 23.976 fps (24000/1001).
    Fps23_976 => "23.976fps", 24000 / 1001;
    /// 29.97 fps (30000/1001).
    Fps29_97 => "29.97fps", 30000 / 1001;
    /// 29.97 fps drop-frame timecode (30000/1001).
    Fps29_97Df => "29.97df", 30000 / 1001;
    /// 40 fps.
    Fps40 => "40fps", 40 / 1;
    /// 47.952 fps (48000/1001).
    Fps47_952 => "47.952fps", 48000 / 1001;
    /// 59.94 fps (60000/1001).
    Fps59_94 => "59.94fps", 60000 / 1001;
    /// 75 fps.
    Fps75 => "75fps", 75 / 1;
    /// 80 fps.
    Fps80 => "80fps", 80 / 1;
    /// 100 fps.
    Fps100 => "100fps", 100 / 1;
    /// 120 fps.
    Fps120 => "120fps", 120 / 1;
    /// 125 fps.
    Fps125 => "125fps", 125 / 1;
    /// 150 fps.
    Fps150 => "150fps", 150 / 1;
    /// 200 fps.
    Fps200 => "200fps", 200 / 1;
    /// 240 fps.
    Fps240 => "240fps", 240 / 1;
    /// 250 fps.
    Fps250 => "250fps", 250 / 1;
    /// 300 fps.
    Fps300 => "300fps", 300 / 1;
    /// 375 fps.
    Fps375 => "375fps", 375 / 1;
    /// 400 fps.
    Fps400 => "400fps", 400 / 1;
    /// 500 fps.
    Fps500 => "500fps", 500 / 1;
    /// 600 fps.
    Fps600 => "600fps", 600 / 1;
    /// 750 fps.
    Fps750 => "750fps", 750 / 1;
    /// 1200 fps.
    Fps1200 => "1200fps", 1200 / 1;
    /// 1500 fps.
    Fps1500 => "1500fps", 1500 / 1;
    /// 2000 fps.
    Fps2000 => "2000fps", 2000 / 1;
    /// 3000 fps.
    Fps3000 => "3000fps", 3000 / 1;
    /// 6000 fps.
    Fps6000 => "6000fps", 6000 / 1;
    /// 44100 fps (audio sample rate).
    Fps44100 => "44100fps", 44100 / 1;
    /// 48000 fps (audio sample rate).
    Fps48000 => "48000fps", 48000 / 1;
}

impl FromStr for TimeUnit {
    type Err = AccelPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s.trim()).ok_or_else(|| {
            AccelPathError::invalid_frame_rate(format!("unknown time unit '{s}'"))
        })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl serde::Serialize for TimeUnit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> serde::Deserialize<'de> for TimeUnit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}

/// Resolve a host time-unit identifier straight to its frame rate.
pub fn resolve_fps(id: &str) -> AccelPathResult<Fps> {
    Ok(id.parse::<TimeUnit>()?.fps())
}

#[cfg(test)]
#[path = "../../tests/unit/time/unit.rs"]
mod tests;
