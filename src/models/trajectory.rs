use super::state::{rocket_state, RocketState, VerticalState};
use crate::errors::Result;
use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

/// One sampled grid point, as written to CSV.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRow {
    pub t: f64,
    pub h: f64,
    pub v: f64,
    pub m: f64,
}

/// Index-aligned time, altitude, velocity and mass histories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub t: Vec<f64>,
    pub h: Vec<f64>,
    pub v: Vec<f64>,
    pub m: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            t: Vec::with_capacity(capacity),
            h: Vec::with_capacity(capacity),
            v: Vec::with_capacity(capacity),
            m: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: f64, state: &RocketState) {
        self.t.push(time);
        self.h.push(state.altitude());
        self.v.push(state.velocity());
        self.m.push(state.mass());
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn state_at(&self, index: usize) -> Option<RocketState> {
        if index >= self.len() {
            return None;
        }
        Some(rocket_state(self.h[index], self.v[index], self.m[index]))
    }

    /// First grid index whose mass is depleted, if burnout happens on the grid.
    pub fn depletion_index(&self) -> Option<usize> {
        self.m.iter().position(|&m| m <= 0.0)
    }

    pub fn rows(&self) -> impl Iterator<Item = TrajectoryRow> + '_ {
        (0..self.len()).map(move |i| TrajectoryRow {
            t: self.t[i],
            h: self.h[i],
            v: self.v[i],
            m: self.m[i],
        })
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);
        for row in self.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(file)
    }

    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut trajectory = Trajectory::default();
        for record in reader.deserialize() {
            let row: TrajectoryRow = record?;
            trajectory.push(row.t, &rocket_state(row.h, row.v, row.m));
        }
        Ok(trajectory)
    }
}
