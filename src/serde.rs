//! Serialization and Deserialization implementation

use ::serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use ipnet::IpNet;

use crate::Table;

impl<T: Serialize> Serialize for Table<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut routes: Vec<(IpNet, &T)> = Vec::with_capacity(self.len());
        self.walk(|net, value| routes.push((net, value)));
        routes.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Table<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let routes: Vec<(IpNet, T)> = Vec::deserialize(deserializer)?;
        let mut table = Table::new();
        for (net, value) in routes {
            table.insert(net, value).map_err(de::Error::custom)?;
        }
        Ok(table)
    }
}
