#![allow(dead_code)]
use log::{Level, LevelFilter, Log, Record};
use mesh_vtkjs::mesh::{Mesh, Points};
use mesh_vtkjs::serialize::ArrayValues;
use mesh_vtkjs::topology::cell_array::CellArray;
use std::cell::RefCell;
use std::sync::Once;

/// Unit square in the z = 0 plane as one quad.
pub fn unit_quad() -> Mesh {
    let points = Points::from_f32(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    Mesh::new(points).with_polys(CellArray::from_cells([[0usize, 1, 2, 3]]).unwrap())
}

/// Values widened to i64, for comparing integer fragments.
pub fn as_i64(values: &ArrayValues) -> Vec<i64> {
    values.iter_f64().map(|v| v as i64).collect()
}

/// Decode legacy `(count, index × count)*` runs back into cells.
/// Stops at the first truncated run.
pub fn decode_legacy(values: &[i64]) -> Vec<Vec<i64>> {
    let mut cells = Vec::new();
    let mut rest = values;
    while let Some((&count, tail)) = rest.split_first() {
        let count = count.max(0) as usize;
        if tail.len() < count {
            break;
        }
        let (cell, next) = tail.split_at(count);
        cells.push(cell.to_vec());
        rest = next;
    }
    cells
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

// Records per test thread, so parallel tests don't see each other's output.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|r| {
            r.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Run `f` and return its result with the warnings it logged on this thread.
pub fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger installed once");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let warnings = RECORDS.with(|r| {
        r.borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level == Level::Warn)
            .map(|(_, msg)| msg)
            .collect()
    });
    (out, warnings)
}
