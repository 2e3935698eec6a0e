//! Test fixtures shared by the metagen crates.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use crate::{CloneData, EntryData, MetadataTree, NodeId, Result};

/// A small camera-style metadata tree with handles to its interesting nodes.
///
/// ```text
/// colorCorrection
///   controls: mode, transform
///   dynamic:  mode (clone), transform
/// flash
///   controls: firingPower, mode
///   static:   info { available, chargeDuration }
///   dynamic:  state
/// sensor
///   static:   info { activeArraySize }, orientation
/// ```
#[derive(Debug, Clone)]
pub struct SampleTree {
    pub tree: MetadataTree,
    pub color_correction: NodeId,
    pub color_correction_mode: NodeId,
    pub color_correction_mode_clone: NodeId,
    pub flash: NodeId,
    pub flash_info: NodeId,
    pub flash_info_available: NodeId,
    pub sensor: NodeId,
    pub sensor_info: NodeId,
}

impl SampleTree {
    /// Build the sample tree.
    pub fn build() -> Result<Self> {
        let mut tree = MetadataTree::new();
        let root = tree.root();

        let color_correction = tree.add_section(root, "colorCorrection")?;
        let controls = tree.add_kind(color_correction, "controls")?;
        let color_correction_mode = tree.add_entry(
            controls,
            "mode",
            EntryData::new("enum")
                .enum_values(["TRANSFORM_MATRIX", "FAST", "HIGH_QUALITY"])
                .description("Mode of operation for the color correction pipeline"),
        )?;
        tree.add_entry(
            controls,
            "transform",
            EntryData::new("rational")
                .container("array")
                .description("Requested color transform"),
        )?;
        let dynamic = tree.add_kind(color_correction, "dynamic")?;
        let color_correction_mode_clone = tree.add_clone(
            dynamic,
            "mode",
            CloneData::new(color_correction_mode).description("Mode used for this frame"),
        )?;
        tree.add_entry(
            dynamic,
            "transform",
            EntryData::new("rational")
                .container("array")
                .description("Color transform applied to this frame"),
        )?;

        let flash = tree.add_section(root, "flash")?;
        let controls = tree.add_kind(flash, "controls")?;
        tree.add_entry(controls, "firingPower", EntryData::new("byte"))?;
        tree.add_entry(
            controls,
            "mode",
            EntryData::new("enum").enum_values(["OFF", "SINGLE", "TORCH"]),
        )?;
        let statics = tree.add_kind(flash, "static")?;
        let flash_info = tree.add_namespace(statics, "info")?;
        let flash_info_available = tree.add_entry(
            flash_info,
            "available",
            EntryData::new("enum").enum_values(["FALSE", "TRUE"]),
        )?;
        tree.add_entry(
            flash_info,
            "chargeDuration",
            EntryData::new("int64").units("nanoseconds"),
        )?;
        let dynamic = tree.add_kind(flash, "dynamic")?;
        tree.add_entry(
            dynamic,
            "state",
            EntryData::new("enum").enum_values(["UNAVAILABLE", "CHARGING", "READY", "FIRED"]),
        )?;

        let sensor = tree.add_section(root, "sensor")?;
        let statics = tree.add_kind(sensor, "static")?;
        let sensor_info = tree.add_namespace(statics, "info")?;
        tree.add_entry(
            sensor_info,
            "activeArraySize",
            EntryData::new("int32").container("array").units("pixels"),
        )?;
        tree.add_entry(
            statics,
            "orientation",
            EntryData::new("int32").units("degrees"),
        )?;

        Ok(Self {
            tree,
            color_correction,
            color_correction_mode,
            color_correction_mode_clone,
            flash,
            flash_info,
            flash_info_available,
            sensor,
            sensor_info,
        })
    }
}
