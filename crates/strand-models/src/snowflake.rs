use serde::Serializer;

/// Snowflake IDs go over the wire as decimal strings; JSON numbers lose
/// precision past 2^53 in most consumers.
pub fn serialize_opt<S>(id: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id {
        Some(id) => serializer.collect_str(id),
        None => serializer.serialize_none(),
    }
}
