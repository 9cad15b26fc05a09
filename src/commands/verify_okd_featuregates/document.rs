use std::collections::BTreeMap;

use serde_yaml::Value;

pub fn nested_value<'a>(document: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(document, |current, segment| current.as_mapping()?.get(*segment))
}

pub fn nested_str<'a>(document: &'a Value, path: &[&str]) -> Option<&'a str> {
    nested_value(document, path)?.as_str()
}

pub fn nested_seq<'a>(document: &'a Value, path: &[&str]) -> Option<&'a [Value]> {
    nested_value(document, path)?
        .as_sequence()
        .map(|sequence| sequence.as_slice())
}

pub fn string_map<'a>(document: &'a Value, path: &[&str]) -> BTreeMap<&'a str, &'a str> {
    let Some(mapping) = nested_value(document, path).and_then(Value::as_mapping) else {
        return BTreeMap::new();
    };

    mapping
        .iter()
        .filter_map(|(key, value)| Some((key.as_str()?, value.as_str()?)))
        .collect()
}
