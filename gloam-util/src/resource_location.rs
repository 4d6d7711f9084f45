use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Visitor};

/// A namespaced identifier such as `gloam:landscape/graveyard/graveyard`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocation {
    pub namespace: String,
    pub path: String,
}

impl ResourceLocation {
    pub const GLOAM_NAMESPACE: &'static str = "gloam";

    pub fn new(namespace: &str, path: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    pub fn gloam(path: &str) -> Self {
        Self::new(Self::GLOAM_NAMESPACE, path)
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = ();

    /// Parses `namespace:path`; a bare path lands in the gloam namespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) if !namespace.is_empty() && !path.is_empty() => {
                Ok(Self::new(namespace, path))
            }
            Some(_) => Err(()),
            None if !s.is_empty() => Ok(Self::gloam(s)),
            None => Err(()),
        }
    }
}

impl Serialize for ResourceLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ResourceLocation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResourceLocationVisitor;

        impl Visitor<'_> for ResourceLocationVisitor {
            type Value = ResourceLocation;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a valid resource location (namespace:path)")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map_err(|()| E::custom(format!("invalid resource location {v:?}")))
            }
        }

        deserializer.deserialize_str(ResourceLocationVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::ResourceLocation;

    #[test]
    fn parses_namespaced() {
        let location: ResourceLocation = "gloam:landscape/graveyard/grave_full".parse().unwrap();
        assert_eq!(location.namespace, "gloam");
        assert_eq!(location.path, "landscape/graveyard/grave_full");
        assert_eq!(location.to_string(), "gloam:landscape/graveyard/grave_full");
    }

    #[test]
    fn bare_path_defaults_namespace() {
        let location: ResourceLocation = "graveyard".parse().unwrap();
        assert_eq!(location, ResourceLocation::gloam("graveyard"));
    }

    #[test]
    fn rejects_empty_parts() {
        assert!("".parse::<ResourceLocation>().is_err());
        assert!(":path".parse::<ResourceLocation>().is_err());
        assert!("ns:".parse::<ResourceLocation>().is_err());
    }
}
