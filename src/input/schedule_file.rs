use std::path::Path;

use anyhow::Context;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::input::ShiftDetail;
use crate::schedule::Interval;
use crate::utils::{self, PathExt};

/// The schedule records as they are delivered by the data source.
///
/// `schedules` drives the calendar, `details` lists the shifts with their
/// stage and weapons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleFile {
    schedules: Vec<Interval>,
    #[serde(default)]
    details: Vec<ShiftDetail>,
}

impl ScheduleFile {
    #[must_use]
    pub fn new(schedules: Vec<Interval>, details: Vec<ShiftDetail>) -> Self {
        Self { schedules, details }
    }

    /// Reads a schedule file, which is parsed as toml if the extension is
    /// `toml` and as json otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = utils::read_to_string(path)
            .with_context(|| format!("failed to read schedule file \"{}\"", path.display()))?;

        let result = if path.has_extension("toml") {
            toml::from_str(&contents).map_err(anyhow::Error::from)
        } else {
            serde_json::from_str(&contents).map_err(anyhow::Error::from)
        };

        let file: Self =
            result.with_context(|| format!("invalid schedule file \"{}\"", path.display()))?;
        trace!(
            "read {} schedules and {} details",
            file.schedules.len(),
            file.details.len()
        );

        Ok(file)
    }

    #[must_use]
    pub fn schedules(&self) -> &[Interval] {
        &self.schedules
    }

    #[must_use]
    pub fn details(&self) -> &[ShiftDetail] {
        &self.details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_json() {
        let file: ScheduleFile = serde_json::from_str(
            r#"{
                "schedules": [
                    { "start_time": 1530698400, "end_time": 1530806400 },
                    { "start_time": 1530849600, "end_time": 1530979200 }
                ]
            }"#,
        )
        .expect("json should be valid");

        assert_eq!(
            file.schedules(),
            &[
                Interval::new(1_530_698_400, 1_530_806_400).unwrap(),
                Interval::new(1_530_849_600, 1_530_979_200).unwrap(),
            ]
        );
        assert_eq!(file.details(), &[]);
    }

    #[test]
    fn test_deserialize_toml() {
        let file: ScheduleFile = toml::from_str(concat!(
            //
            "[[schedules]]\n",
            "start_time = 1530698400\n",
            "end_time = 1530806400\n",
            "\n",
            "[[details]]\n",
            "start_time = 1530698400\n",
            "end_time = 1530806400\n",
            "weapons = [{ name = \"Splattershot\" }]\n",
            "\n",
            "[details.stage]\n",
            "name = \"Spawning Grounds\"\n",
        ))
        .expect("toml should be valid");

        assert_eq!(file.schedules().len(), 1);
        assert_eq!(
            file.details()[0].stage().map(|stage| stage.name()),
            Some("Spawning Grounds")
        );
        assert_eq!(file.details()[0].weapons().len(), 1);
    }

    #[test]
    fn test_rejects_empty_interval() {
        let result = serde_json::from_str::<ScheduleFile>(
            r#"{ "schedules": [{ "start_time": 1530698400, "end_time": 1530698400 }] }"#,
        );

        assert!(result.is_err());
    }
}
