// BizDir - core/export.rs
//
// CSV and JSON export of the current view.
// Core layer: writes to any Write trait object.

use crate::core::model::{BusinessEntity, YearFounded};
use crate::util::constants;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

fn check_size(count: usize) -> Result<(), ExportError> {
    if count > constants::MAX_EXPORT_ENTRIES {
        return Err(ExportError::TooManyEntries {
            count,
            max: constants::MAX_EXPORT_ENTRIES,
        });
    }
    Ok(())
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Export the view to CSV.
///
/// Writes: id, rank, name, industry, location, phone, local_employees,
/// total_employees, founded, website, award_winner, categories, description.
/// Categories are joined with `; `.
pub fn export_csv<W: Write>(
    entities: &[&BusinessEntity],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_size(entities.len())?;

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "rank",
            "name",
            "industry",
            "location",
            "phone",
            "local_employees",
            "total_employees",
            "founded",
            "website",
            "award_winner",
            "categories",
            "description",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for entity in entities {
        let founded = entity
            .year_founded
            .as_ref()
            .map(YearFounded::to_string)
            .unwrap_or_default();
        let website = if entity.has_website() {
            entity.website.as_str()
        } else {
            ""
        };

        csv_writer
            .write_record([
                entity.id.as_str(),
                opt(entity.rank).as_str(),
                entity.name.as_str(),
                entity.industry.as_str(),
                entity.location.as_str(),
                entity.phone_number.as_deref().unwrap_or(""),
                opt(entity.local_employees).as_str(),
                opt(entity.total_employees).as_str(),
                founded.as_str(),
                website,
                if entity.is_award_winner { "yes" } else { "no" },
                entity.categories.join("; ").as_str(),
                entity.description.as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export the view to JSON (array of camelCase entity objects).
pub fn export_json<W: Write>(
    entities: &[&BusinessEntity],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_size(entities.len())?;

    serde_json::to_writer_pretty(writer, entities).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(entities.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::award::AwardMatcher;
    use crate::core::enrich::enrich;
    use serde_json::json;

    fn make_entity(value: serde_json::Value, index: usize) -> BusinessEntity {
        let raw = value.as_object().cloned().unwrap_or_default();
        enrich(&raw, index, &AwardMatcher::builtin())
    }

    #[test]
    fn test_csv_export() {
        let a = make_entity(
            json!({"name": "Telesat", "rank": 2, "categories": ["Space", "Telecom"]}),
            0,
        );
        let b = make_entity(json!({"name": "Shop, Inc", "founded": "For 5 years"}), 1);
        let mut buf = Vec::new();
        let count = export_csv(&[&a, &b], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("id,rank,name,industry"));
        assert!(output.contains("gen-0,2,Telesat,Space"));
        assert!(output.contains("Space; Telecom"));
        assert!(output.contains("\"Shop, Inc\""));
        assert!(output.contains("For 5 years"));
    }

    #[test]
    fn test_json_export_uses_camel_case() {
        let a = make_entity(json!({"name": "Bloks", "localEmployees": 12}), 0);
        let mut buf = Vec::new();
        let count = export_json(&[&a], &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let output: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(output[0]["name"], "Bloks");
        assert_eq!(output[0]["localEmployees"], 12);
        assert_eq!(output[0]["isAwardWinner"], true);
        assert_eq!(output[0]["rank"], serde_json::Value::Null);
    }
}
