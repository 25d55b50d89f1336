use std::io;

use dharm_core::{JointList, JointParameters, COLUMN_HEADERS, DEFAULT_DOF};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Data column of the joint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// Joint angle in degrees.
    Theta,
    /// Link length in meters.
    A,
    /// Link offset in meters.
    D,
    /// Link twist in radians.
    Alpha,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Theta, Column::A, Column::D, Column::Alpha];

    #[inline]
    fn index(&self) -> usize {
        match self {
            Column::Theta => 0,
            Column::A => 1,
            Column::D => 2,
            Column::Alpha => 3,
        }
    }

    /// Column header with unit.
    pub fn header(&self) -> &'static str {
        COLUMN_HEADERS[self.index()]
    }

    /// Short description of the column.
    pub fn tooltip(&self) -> &'static str {
        match self {
            Column::Theta => "θ, degrees",
            Column::A => "a, meters",
            Column::D => "d, meters",
            Column::Alpha => "α, radians",
        }
    }

    fn get(&self, joint: &JointParameters) -> f64 {
        match self {
            Column::Theta => joint.theta,
            Column::A => joint.a,
            Column::D => joint.d,
            Column::Alpha => joint.alpha,
        }
    }

    fn set(&self, joint: &mut JointParameters, value: f64) {
        match self {
            Column::Theta => joint.theta = value,
            Column::A => joint.a = value,
            Column::D => joint.d = value,
            Column::Alpha => joint.alpha = value,
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// CSV record. Empty cells read as zero.
#[derive(Deserialize, Serialize)]
struct Record {
    #[serde(rename = "theta (deg)")]
    theta: Option<f64>,
    #[serde(rename = "a (m)")]
    a: Option<f64>,
    #[serde(rename = "d (m)")]
    d: Option<f64>,
    #[serde(rename = "alpha (rad)")]
    alpha: Option<f64>,
}

impl From<Record> for JointParameters {
    fn from(value: Record) -> Self {
        JointParameters::new(
            value.theta.unwrap_or_default(),
            value.a.unwrap_or_default(),
            value.d.unwrap_or_default(),
            value.alpha.unwrap_or_default(),
        )
    }
}

impl From<&JointParameters> for Record {
    fn from(value: &JointParameters) -> Self {
        Self {
            theta: Some(value.theta),
            a: Some(value.a),
            d: Some(value.d),
            alpha: Some(value.alpha),
        }
    }
}

/// Editable table of joints, one row per joint.
#[derive(Clone, Debug, PartialEq)]
pub struct JointTable {
    rows: JointList,
}

impl JointTable {
    /// Construct a table from joints.
    pub fn new(rows: JointList) -> Self {
        Self { rows }
    }

    /// Construct a table from the reference arm.
    pub fn from_preset(count: usize) -> Self {
        Self::new(dharm_core::default_joint_list(count))
    }

    /// Read a table from CSV.
    ///
    /// The header row must use the column headers. Cells are trimmed, an
    /// empty cell reads as zero and any other non-numeric cell is an error.
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?;
        if !headers.iter().eq(COLUMN_HEADERS) {
            return Err(Error::Header {
                found: headers.iter().map(String::from).collect(),
            });
        }

        let mut rows = vec![];
        for record in reader.deserialize::<Record>() {
            rows.push(record?.into());
        }

        log::debug!("Read joint table with {} rows", rows.len());

        Ok(Self::new(rows))
    }

    /// Write the table as CSV, header row first.
    ///
    /// The header row is written even when the table is empty.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        writer.write_record(COLUMN_HEADERS)?;

        for joint in &self.rows {
            writer.serialize(Record::from(joint))?;
        }

        writer.flush()?;

        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[JointParameters] {
        &self.rows
    }

    /// Snapshot of the table as joint list.
    pub fn joint_list(&self) -> JointList {
        self.rows.clone()
    }

    /// Row names, `Joint 1` to `Joint n`.
    pub fn joint_names(&self) -> Vec<String> {
        dharm_core::joint_names(self.rows.len())
    }

    fn check_row(&self, row: usize) -> Result {
        if row >= self.rows.len() {
            Err(Error::RowOutOfRange {
                row,
                len: self.rows.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Value of a single cell.
    pub fn get(&self, row: usize, column: Column) -> Option<f64> {
        self.rows.get(row).map(|joint| column.get(joint))
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, row: usize, column: Column, value: f64) -> Result {
        self.check_row(row)?;

        column.set(&mut self.rows[row], value);

        Ok(())
    }

    /// Insert a zero joint directly below `row`.
    ///
    /// An empty table accepts row 0 and receives its first joint.
    pub fn insert_below(&mut self, row: usize) -> Result {
        if self.rows.is_empty() && row == 0 {
            self.rows.push(JointParameters::zero());
            return Ok(());
        }

        self.check_row(row)?;

        self.rows.insert(row + 1, JointParameters::zero());

        log::debug!("Inserted row below {}, table has {} rows", row, self.rows.len());

        Ok(())
    }

    /// Remove `row`. The last remaining row cannot be removed.
    pub fn remove(&mut self, row: usize) -> Result<JointParameters> {
        if self.rows.len() <= 1 {
            return Err(Error::LastRow);
        }

        self.check_row(row)?;

        let joint = self.rows.remove(row);

        log::debug!("Removed row {}, table has {} rows", row, self.rows.len());

        Ok(joint)
    }

    /// Replace the table by a single zero row.
    pub fn clear(&mut self) {
        self.rows = vec![JointParameters::zero()];
    }

    /// Replace the table by the reference arm.
    pub fn reset(&mut self) {
        self.rows = dharm_core::default_joint_list(DEFAULT_DOF);
    }
}

impl Default for JointTable {
    fn default() -> Self {
        Self::from_preset(DEFAULT_DOF)
    }
}

impl From<JointList> for JointTable {
    fn from(value: JointList) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for JointTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<10}", "")?;
        for column in Column::ALL {
            write!(f, "{:>14}", column.header())?;
        }
        writeln!(f)?;

        for (name, joint) in self.joint_names().iter().zip(&self.rows) {
            write!(f, "{:<10}", name)?;
            for column in Column::ALL {
                write!(f, "{:>14.3}", column.get(joint))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = JointTable::default();

        assert_eq!(table.len(), DEFAULT_DOF);
        assert_eq!(table.get(0, Column::Theta), Some(15.0));
        assert_eq!(table.get(0, Column::D), Some(0.213));
        assert_eq!(table.get(DEFAULT_DOF, Column::A), None);
    }

    #[test]
    fn test_insert_below() {
        let mut table = JointTable::from_preset(2);

        table.insert_below(0).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[1], JointParameters::zero());
        assert_eq!(table.get(2, Column::A), Some(-0.8));
    }

    #[test]
    fn test_insert_below_last() {
        let mut table = JointTable::from_preset(2);

        table.insert_below(1).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.rows()[2], JointParameters::zero());
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut table = JointTable::from_preset(2);

        assert!(matches!(
            table.insert_below(2),
            Err(Error::RowOutOfRange { row: 2, len: 2 })
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut table = JointTable::from_preset(3);

        let joint = table.remove(1).unwrap();

        assert_eq!(joint.theta, -50.0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1, Column::Theta), Some(-60.0));
    }

    #[test]
    fn test_remove_last_row() {
        let mut table = JointTable::from_preset(1);

        assert!(matches!(table.remove(0), Err(Error::LastRow)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut table = JointTable::from_preset(3);

        assert!(matches!(
            table.remove(5),
            Err(Error::RowOutOfRange { row: 5, len: 3 })
        ));
    }

    #[test]
    fn test_clear_and_reset() {
        let mut table = JointTable::default();

        table.clear();
        assert_eq!(table.rows(), &[JointParameters::zero()]);

        table.reset();
        assert_eq!(table, JointTable::default());
    }

    #[test]
    fn test_set() {
        let mut table = JointTable::from_preset(2);

        table.set(1, Column::Alpha, 0.5).unwrap();
        assert_eq!(table.get(1, Column::Alpha), Some(0.5));

        assert!(table.set(2, Column::Alpha, 0.5).is_err());
    }

    #[test]
    fn test_joint_names() {
        let table = JointTable::from_preset(2);

        assert_eq!(table.joint_names(), vec!["Joint 1", "Joint 2"]);
    }

    #[test]
    fn test_read_csv() {
        let data = "theta (deg),a (m),d (m),alpha (rad)\n\
                    90, 1.5, 0.25, 1.5708\n\
                    -45,,0.1,\n";

        let table = JointTable::read_csv(data.as_bytes()).unwrap();

        assert_eq!(
            table.rows(),
            &[
                JointParameters::new(90.0, 1.5, 0.25, 1.5708),
                JointParameters::new(-45.0, 0.0, 0.1, 0.0),
            ]
        );
    }

    #[test]
    fn test_read_csv_invalid_cell() {
        let data = "theta (deg),a (m),d (m),alpha (rad)\nninety,0,0,0\n";

        assert!(matches!(
            JointTable::read_csv(data.as_bytes()),
            Err(Error::Csv(_))
        ));
    }

    #[test]
    fn test_read_csv_unknown_header() {
        let data = "theta,a,d,alpha\n90,1.5,0.25,1.0\n";

        match JointTable::read_csv(data.as_bytes()) {
            Err(Error::Header { found }) => assert_eq!(found, vec!["theta", "a", "d", "alpha"]),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_read_csv_missing_column() {
        let data = "theta (deg),a (m),d (m)\n90,1.5,0.25\n";

        assert!(matches!(
            JointTable::read_csv(data.as_bytes()),
            Err(Error::Header { .. })
        ));
    }

    #[test]
    fn test_empty_table_round_trip() {
        let mut buffer = vec![];
        JointTable::new(vec![]).write_csv(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "theta (deg),a (m),d (m),alpha (rad)\n"
        );

        let mut table = JointTable::read_csv(buffer.as_slice()).unwrap();
        assert!(table.is_empty());

        table.insert_below(0).unwrap();
        assert_eq!(table.rows(), &[JointParameters::zero()]);
    }

    #[test]
    fn test_insert_empty_table_out_of_range() {
        let mut table = JointTable::new(vec![]);

        assert!(matches!(
            table.insert_below(1),
            Err(Error::RowOutOfRange { row: 1, len: 0 })
        ));
    }

    #[test]
    fn test_from_joint_list() {
        let joints = dharm_core::default_joint_list(2);

        let table = JointTable::from(joints.clone());

        assert_eq!(table.joint_list(), joints);
        assert_eq!(Column::Alpha.tooltip(), "α, radians");
    }

    #[test]
    fn test_write_csv() {
        let table = JointTable::new(vec![JointParameters::new(15.0, -0.8, 0.213, 0.5)]);

        let mut buffer = vec![];
        table.write_csv(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("theta (deg),a (m),d (m),alpha (rad)"));
        assert_eq!(lines.next(), Some("15.0,-0.8,0.213,0.5"));

        assert_eq!(JointTable::read_csv(text.as_bytes()).unwrap(), table);
    }

    #[test]
    fn test_display() {
        let table = JointTable::from_preset(1);
        let text = table.to_string();

        assert!(text.contains("theta (deg)"));
        assert!(text.contains("Joint 1"));
        assert!(text.contains("15.000"));
        assert!(text.contains("0.213"));
    }
}
