use super::NameRecord;
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for NameRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NameRecord", 4)?;
        state.serialize_field("prefix", &self.prefix)?;
        state.serialize_field("first_name", &self.first_name)?;
        state.serialize_field("last_name", &self.last_name)?;
        state.serialize_field("suffix", &self.suffix)?;
        state.end()
    }
}

impl NameRecord {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
