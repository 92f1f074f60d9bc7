//! String-valued enumerations used by card elements and host config.
//!
//! Values are matched case-insensitively on input and written back in their
//! canonical Adaptive Card spelling.

use std::fmt;

/// An enumeration carried in JSON as a string.
pub trait JsonEnum: Sized + Copy + Default + 'static {
    /// Type name used in warning messages.
    const NAME: &'static str;

    fn parse(value: &str) -> Option<Self>;

    fn as_str(&self) -> &'static str;
}

macro_rules! json_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? } default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl JsonEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn parse(value: &str) -> Option<Self> {
                let value = value.trim();
                $(
                    if value.eq_ignore_ascii_case($text) {
                        return Some($name::$variant);
                    }
                )+
                None
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

json_enum! {
    /// Vertical gap before an element.
    Spacing {
        Default => "default",
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    } default = Default
}

json_enum! {
    TextSize {
        Default => "default",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
    } default = Default
}

json_enum! {
    TextWeight {
        Default => "default",
        Lighter => "lighter",
        Bolder => "bolder",
    } default = Default
}

json_enum! {
    ForegroundColor {
        Default => "default",
        Dark => "dark",
        Light => "light",
        Accent => "accent",
        Good => "good",
        Warning => "warning",
        Attention => "attention",
    } default = Default
}

json_enum! {
    HorizontalAlignment {
        Left => "left",
        Center => "center",
        Right => "right",
    } default = Left
}

json_enum! {
    ImageSize {
        Auto => "auto",
        Stretch => "stretch",
        Small => "small",
        Medium => "medium",
        Large => "large",
    } default = Auto
}

json_enum! {
    TextInputStyle {
        Text => "text",
        Tel => "tel",
        Url => "url",
        Email => "email",
        Password => "password",
    } default = Text
}

json_enum! {
    ChoiceSetStyle {
        Compact => "compact",
        Expanded => "expanded",
        Filtered => "filtered",
    } default = Compact
}

json_enum! {
    ContainerStyle {
        Default => "default",
        Emphasis => "emphasis",
        Good => "good",
        Attention => "attention",
        Warning => "warning",
        Accent => "accent",
    } default = Default
}

json_enum! {
    ActionStyle {
        Default => "default",
        Positive => "positive",
        Destructive => "destructive",
    } default = Default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(TextWeight::parse("Bolder"), Some(TextWeight::Bolder));
        assert_eq!(Spacing::parse("EXTRALARGE"), Some(Spacing::ExtraLarge));
        assert_eq!(ChoiceSetStyle::parse(" expanded "), Some(ChoiceSetStyle::Expanded));
        assert_eq!(TextSize::parse("huge"), None);
    }

    #[test]
    fn serializes_canonical_spelling() {
        let value = serde_json::to_value(Spacing::ExtraLarge).expect("serialize");
        assert_eq!(value, "extraLarge");
        assert_eq!(HorizontalAlignment::default().to_string(), "left");
    }
}
