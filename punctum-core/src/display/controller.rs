//! Braille display controller
//!
//! The single owner of all cell, dot and output state. One instance is
//! constructed explicitly and passed through the application; there is no
//! ambient clock either - every time-dependent operation takes `now_ms`
//! from the caller, and deferred commits are driven solely by periodic
//! [`BrailleDisplay::update`] calls.

use heapless::Vec;

use super::cell::Cell;
use crate::actuator::{DotPosition, DotScheduler, DotState};
use crate::braille::{self, EncodeStatus};
use crate::config::{DisplayConfig, DOTS_PER_CELL, MAX_CELLS};
use crate::output::OutputBuffer;
use crate::traits::OutputSink;

/// Errors surfaced by the display controller
///
/// Invalid indices reject without touching any state; a caller that
/// ignores the result sees a plain no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// Cell index outside the configured cell count
    InvalidCell,
    /// Dot offset outside 0..6
    InvalidDot,
    /// The output sink failed
    Sink(E),
}

/// Refreshable braille display controller
///
/// Owns the output sink. While the display is enabled, `refresh` pushes
/// the serialized buffer to the sink; while disabled, dot state still
/// evolves but nothing is driven physically.
pub struct BrailleDisplay<S> {
    config: DisplayConfig,
    cells: Vec<Cell, MAX_CELLS>,
    scheduler: DotScheduler,
    output: OutputBuffer,
    sink: S,
    enabled: bool,
}

impl<S: OutputSink> BrailleDisplay<S> {
    /// Create a display with every cell blank and every dot retracted
    ///
    /// The display starts disabled; call [`enable`](Self::enable) once the
    /// hardware is ready to be driven.
    pub fn new(config: DisplayConfig, sink: S) -> Self {
        let mut cells = Vec::new();
        for _ in 0..(config.cells as usize).min(MAX_CELLS) {
            let _ = cells.push(Cell::default());
        }
        let scheduler = DotScheduler::new(
            cells.len() * DOTS_PER_CELL,
            config.timing.settle_ms,
        );
        // Serialize the all-retracted initial state so every raise/retract
        // pair is complementary from the start
        let mut output = OutputBuffer::new(scheduler.len());
        output.rebuild(scheduler.positions());

        Self {
            config,
            cells,
            scheduler,
            output,
            sink,
            enabled: false,
        }
    }

    /// The configuration this display was built from
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether physical output is currently driven
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable physical output and push the current buffer
    pub fn enable(&mut self) -> Result<(), DisplayError<S::Error>> {
        self.enabled = true;
        self.sink
            .set_output_enabled(true)
            .map_err(DisplayError::Sink)?;
        self.refresh()
    }

    /// Suppress physical output
    ///
    /// Dot state is untouched; only the drive to the actuators stops.
    pub fn disable(&mut self) -> Result<(), DisplayError<S::Error>> {
        self.enabled = false;
        self.sink
            .set_output_enabled(false)
            .map_err(DisplayError::Sink)
    }

    /// Write the current output frame to the sink
    ///
    /// No-op while disabled. Blocks for the duration of the write.
    pub fn refresh(&mut self) -> Result<(), DisplayError<S::Error>> {
        if !self.enabled {
            return Ok(());
        }
        let frame = self.output.frame();
        self.sink.write_frame(&frame).map_err(DisplayError::Sink)
    }

    /// Set one cell's pattern
    ///
    /// The pattern is masked to 6 bits; the cell's six dot targets are
    /// derived from the pattern bits and scheduled deferred. While the
    /// display is enabled the cell's pending actions are committed right
    /// away and the output refreshed - interactive single-cell updates
    /// trade the settle wait for responsiveness.
    pub fn set_cell_pattern(
        &mut self,
        cell_index: u8,
        pattern: u8,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        let index = cell_index as usize;
        if index >= self.cells.len() {
            return Err(DisplayError::InvalidCell);
        }

        let masked = pattern & braille::PATTERN_MASK;
        self.cells[index] = Cell {
            pattern: masked,
            active: masked != 0,
            last_update_ms: now_ms,
        };

        let base = index * DOTS_PER_CELL;
        for dot in 0..DOTS_PER_CELL {
            let raised = masked & (1 << dot) != 0;
            self.scheduler
                .set_target(base + dot, DotPosition::from_raised(raised), false, now_ms);
        }

        if self.enabled && self.scheduler.commit_range(base, DOTS_PER_CELL) {
            self.sync_output()?;
        }
        Ok(())
    }

    /// Display a string starting at `start_cell`
    ///
    /// Clears the display first. Returns the encoder's status so callers
    /// can observe truncation and unmapped characters.
    pub fn display_text(
        &mut self,
        text: &str,
        start_cell: u8,
        now_ms: u32,
    ) -> Result<EncodeStatus, DisplayError<S::Error>> {
        let start = start_cell as usize;
        if start >= self.cells.len() {
            return Err(DisplayError::InvalidCell);
        }

        self.clear_display(now_ms)?;

        let encoded = braille::encode_text(text, self.cells.len() - start);
        for (i, &pattern) in encoded.cells.iter().enumerate() {
            self.set_cell_pattern((start + i) as u8, pattern, now_ms)?;
        }
        Ok(encoded.status)
    }

    /// Display a single character in one cell
    ///
    /// No prefix signs are applied at this level; digits render as their
    /// bare shapes and unmapped characters as blank. Returns the pattern
    /// written.
    pub fn display_char(
        &mut self,
        c: char,
        cell_index: u8,
        now_ms: u32,
    ) -> Result<u8, DisplayError<S::Error>> {
        let pattern = braille::char_to_pattern(c);
        self.set_cell_pattern(cell_index, pattern, now_ms)?;
        Ok(pattern)
    }

    /// Set one cell to the mirror image of `pattern`
    pub fn display_mirrored_pattern(
        &mut self,
        cell_index: u8,
        pattern: u8,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        self.set_cell_pattern(cell_index, braille::mirror(pattern), now_ms)
    }

    /// Display a string mirrored for writing practice
    ///
    /// Renders the text normally, then flips each active cell's stored
    /// pattern in place and drives the dots to the mirrored bits directly.
    /// Unlike every other pattern-setting path this one does not run
    /// through the settle-time scheduler: the flip takes effect on the
    /// next refresh with no settle window.
    pub fn display_mirrored_text(
        &mut self,
        text: &str,
        start_cell: u8,
        now_ms: u32,
    ) -> Result<EncodeStatus, DisplayError<S::Error>> {
        let status = self.display_text(text, start_cell, now_ms)?;

        for index in (start_cell as usize)..self.cells.len() {
            if !self.cells[index].active {
                continue;
            }
            let mirrored = braille::mirror(self.cells[index].pattern);
            self.cells[index].pattern = mirrored;

            let base = index * DOTS_PER_CELL;
            for dot in 0..DOTS_PER_CELL {
                let raised = mirrored & (1 << dot) != 0;
                self.scheduler
                    .force_position(base + dot, DotPosition::from_raised(raised));
            }
        }

        self.sync_output()?;
        Ok(status)
    }

    /// Blank every cell and schedule every dot to retract
    ///
    /// The retractions are deferred through the scheduler like any other
    /// update; the all-retracted frame lands as ticks commit. The output
    /// buffer is re-serialized from the still-committed states so each
    /// raise/retract pair stays complementary throughout.
    pub fn clear_display(&mut self, now_ms: u32) -> Result<(), DisplayError<S::Error>> {
        for cell in self.cells.iter_mut() {
            *cell = Cell::blank(now_ms);
        }
        for dot in 0..self.scheduler.len() {
            self.scheduler
                .set_target(dot, DotPosition::Retracted, false, now_ms);
        }
        self.sync_output()
    }

    /// Schedule one dot to raise after the settle time
    pub fn raise_dot(
        &mut self,
        cell_index: u8,
        dot_offset: u8,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        self.set_dot(cell_index, dot_offset, DotPosition::Raised, false, now_ms)
    }

    /// Schedule one dot to retract after the settle time
    pub fn lower_dot(
        &mut self,
        cell_index: u8,
        dot_offset: u8,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        self.set_dot(cell_index, dot_offset, DotPosition::Retracted, false, now_ms)
    }

    /// Raise one dot synchronously and refresh
    pub fn raise_dot_immediate(
        &mut self,
        cell_index: u8,
        dot_offset: u8,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        self.set_dot(cell_index, dot_offset, DotPosition::Raised, true, now_ms)
    }

    /// Retract one dot synchronously and refresh
    pub fn lower_dot_immediate(
        &mut self,
        cell_index: u8,
        dot_offset: u8,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        self.set_dot(cell_index, dot_offset, DotPosition::Retracted, true, now_ms)
    }

    /// Periodic entry point: commit due actions and refresh on change
    ///
    /// The host loop must call this frequently relative to the settle
    /// time; commit latency is bounded below by the settle time and
    /// unbounded above if the loop stalls. Returns whether anything
    /// committed.
    pub fn update(&mut self, now_ms: u32) -> Result<bool, DisplayError<S::Error>> {
        if self.scheduler.tick(now_ms) {
            self.sync_output()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// The stored 6-bit pattern of a cell
    pub fn cell_pattern(&self, cell_index: u8) -> Option<u8> {
        self.cell(cell_index).map(|cell| cell.pattern)
    }

    /// Whether a cell's stored pattern is non-blank
    pub fn is_cell_active(&self, cell_index: u8) -> Option<bool> {
        self.cell(cell_index).map(|cell| cell.active)
    }

    /// Inspect one cell
    pub fn cell(&self, cell_index: u8) -> Option<&Cell> {
        self.cells.get(cell_index as usize)
    }

    /// The committed physical state of a cell, assembled from its dots
    ///
    /// Trails [`cell_pattern`](Self::cell_pattern) until the scheduler
    /// has committed every pending dot of the cell.
    pub fn current_cell_state(&self, cell_index: u8) -> Option<u8> {
        let index = cell_index as usize;
        if index >= self.cells.len() {
            return None;
        }
        let base = index * DOTS_PER_CELL;
        let mut pattern = 0u8;
        for dot in 0..DOTS_PER_CELL {
            if let Some(state) = self.scheduler.dot(base + dot) {
                if state.current.is_raised() {
                    pattern |= 1 << dot;
                }
            }
        }
        Some(pattern)
    }

    /// Inspect one dot's scheduling state
    pub fn dot(&self, cell_index: u8, dot_offset: u8) -> Option<&DotState> {
        if dot_offset as usize >= DOTS_PER_CELL {
            return None;
        }
        self.scheduler
            .dot(cell_index as usize * DOTS_PER_CELL + dot_offset as usize)
    }

    /// Number of dots with a commit still pending
    pub fn pending_actions(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Inspect the serialized output buffer
    pub fn output(&self) -> &OutputBuffer {
        &self.output
    }

    /// Borrow the output sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the display and reclaim the sink
    pub fn release(self) -> S {
        self.sink
    }

    fn set_dot(
        &mut self,
        cell_index: u8,
        dot_offset: u8,
        position: DotPosition,
        immediate: bool,
        now_ms: u32,
    ) -> Result<(), DisplayError<S::Error>> {
        if cell_index as usize >= self.cells.len() {
            return Err(DisplayError::InvalidCell);
        }
        if dot_offset as usize >= DOTS_PER_CELL {
            return Err(DisplayError::InvalidDot);
        }

        let index = cell_index as usize * DOTS_PER_CELL + dot_offset as usize;
        if self.scheduler.set_target(index, position, immediate, now_ms) {
            self.sync_output()?;
        }
        Ok(())
    }

    /// Rebuild the output buffer from committed dot states and refresh
    fn sync_output(&mut self) -> Result<(), DisplayError<S::Error>> {
        self.output.rebuild(self.scheduler.positions());
        self.refresh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braille::{CAPITAL_SIGN, NUMBER_SIGN};
    use crate::config::MAX_OUTPUT_GROUPS;
    use crate::output::{output_index, DriveLine};
    use core::convert::Infallible;

    const SETTLE: u32 = 50;

    /// Sink recording the frames it was handed
    struct RecordingSink {
        writes: u32,
        last_frame: Vec<u8, MAX_OUTPUT_GROUPS>,
        output_enabled: bool,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                writes: 0,
                last_frame: Vec::new(),
                output_enabled: false,
            }
        }
    }

    impl OutputSink for RecordingSink {
        type Error = Infallible;

        fn write_frame(&mut self, frame: &[u8]) -> Result<(), Infallible> {
            self.writes += 1;
            self.last_frame.clear();
            let _ = self.last_frame.extend_from_slice(frame);
            Ok(())
        }

        fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Infallible> {
            self.output_enabled = enabled;
            Ok(())
        }
    }

    fn make_display() -> BrailleDisplay<RecordingSink> {
        let config = DisplayConfig::with_cells(10).unwrap();
        BrailleDisplay::new(config, RecordingSink::new())
    }

    /// Every dot must drive exactly one of its two coils
    fn assert_output_pairs_complementary(display: &BrailleDisplay<RecordingSink>) {
        for dot in 0..display.config().dot_count() {
            let raise = display.output().bit(output_index(dot, DriveLine::Raise));
            let retract = display.output().bit(output_index(dot, DriveLine::Retract));
            assert_ne!(raise, retract, "dot {} pair not complementary", dot);
        }
    }

    #[test]
    fn test_new_display_is_blank_and_disabled() {
        let display = make_display();
        assert!(!display.is_enabled());
        assert_eq!(display.cell_count(), 10);
        for cell in 0..10 {
            assert_eq!(display.cell_pattern(cell), Some(0));
            assert_eq!(display.is_cell_active(cell), Some(false));
            assert_eq!(display.current_cell_state(cell), Some(0));
        }
        assert_eq!(display.pending_actions(), 0);
        assert_output_pairs_complementary(&display);
    }

    #[test]
    fn test_set_cell_pattern_masks_to_six_bits() {
        let mut display = make_display();
        for cell in 0..10u8 {
            for pattern in 0u16..=255 {
                display.set_cell_pattern(cell, pattern as u8, 0).unwrap();
                assert_eq!(display.cell_pattern(cell), Some(pattern as u8 & 0x3F));
            }
        }
    }

    #[test]
    fn test_active_flag_follows_masked_pattern() {
        let mut display = make_display();
        display.set_cell_pattern(0, 0x15, 0).unwrap();
        assert_eq!(display.is_cell_active(0), Some(true));

        // Only bits outside the dot range: masked pattern is blank
        display.set_cell_pattern(0, 0xC0, 0).unwrap();
        assert_eq!(display.cell_pattern(0), Some(0));
        assert_eq!(display.is_cell_active(0), Some(false));
    }

    #[test]
    fn test_invalid_cell_index_rejected_without_state_change() {
        let mut display = make_display();
        assert_eq!(
            display.set_cell_pattern(10, 0x3F, 0),
            Err(DisplayError::InvalidCell)
        );
        assert_eq!(display.pending_actions(), 0);
        assert_eq!(display.cell_pattern(10), None);
    }

    #[test]
    fn test_deferred_commit_waits_for_settle_while_disabled() {
        let mut display = make_display();
        display.set_cell_pattern(0, 0x07, 1_000).unwrap();

        // Target recorded, physical state untouched
        assert_eq!(display.cell_pattern(0), Some(0x07));
        assert_eq!(display.current_cell_state(0), Some(0));
        assert_eq!(display.pending_actions(), 6);

        assert!(!display.update(1_000 + SETTLE - 1).unwrap());
        assert_eq!(display.current_cell_state(0), Some(0));

        assert!(display.update(1_000 + SETTLE).unwrap());
        assert_eq!(display.current_cell_state(0), Some(0x07));
        assert_eq!(display.pending_actions(), 0);

        // Disabled the whole time: nothing was pushed to the sink
        assert_eq!(display.sink().writes, 0);
        assert!(!display.sink().output_enabled);
    }

    #[test]
    fn test_enabled_cell_update_commits_immediately() {
        let mut display = make_display();
        display.enable().unwrap();
        let writes_after_enable = display.sink().writes;

        display.set_cell_pattern(2, 0x19, 5_000).unwrap();

        // No settle wait on the interactive path
        assert_eq!(display.current_cell_state(2), Some(0x19));
        assert_eq!(display.pending_actions(), 0);
        assert!(display.sink().writes > writes_after_enable);
        assert_output_pairs_complementary(&display);
    }

    #[test]
    fn test_output_bits_track_committed_state() {
        let mut display = make_display();
        display.enable().unwrap();
        display.set_cell_pattern(0, 0x01, 0).unwrap();

        let base = 0;
        assert!(display.output().bit(output_index(base, DriveLine::Raise)));
        assert!(!display.output().bit(output_index(base, DriveLine::Retract)));
        // Dot 2 of the cell is retracted
        assert!(!display.output().bit(output_index(base + 1, DriveLine::Raise)));
        assert!(display.output().bit(output_index(base + 1, DriveLine::Retract)));
    }

    #[test]
    fn test_display_text_encodes_with_prefixes() {
        let mut display = make_display();
        let status = display.display_text("5", 0, 0).unwrap();
        assert!(status.is_clean());
        assert_eq!(display.cell_pattern(0), Some(NUMBER_SIGN));
        assert_eq!(
            display.cell_pattern(1),
            Some(braille::char_to_pattern('5'))
        );
        assert_eq!(display.cell_pattern(2), Some(0));

        let status = display.display_text("Ab", 0, 0).unwrap();
        assert!(status.is_clean());
        assert_eq!(display.cell_pattern(0), Some(CAPITAL_SIGN));
        assert_eq!(
            display.cell_pattern(1),
            Some(braille::char_to_pattern('a'))
        );
        assert_eq!(
            display.cell_pattern(2),
            Some(braille::char_to_pattern('b'))
        );
    }

    #[test]
    fn test_display_text_reports_truncation_without_wraparound() {
        let mut display = make_display();
        let status = display.display_text("abcdefghijklmnop", 0, 0).unwrap();
        assert!(status.truncated);
        for cell in 0..10u8 {
            let expected = braille::char_to_pattern((b'a' + cell) as char);
            assert_eq!(display.cell_pattern(cell), Some(expected));
        }
    }

    #[test]
    fn test_display_text_respects_start_cell() {
        let mut display = make_display();
        display.display_text("z", 8, 0).unwrap();
        assert_eq!(display.cell_pattern(7), Some(0));
        assert_eq!(
            display.cell_pattern(8),
            Some(braille::char_to_pattern('z'))
        );

        assert_eq!(
            display.display_text("z", 10, 0),
            Err(DisplayError::InvalidCell)
        );
    }

    #[test]
    fn test_display_text_reports_unmapped_characters() {
        let mut display = make_display();
        let status = display.display_text("a%b", 0, 0).unwrap();
        assert_eq!(status.unmapped.len(), 1);
        assert_eq!(status.unmapped[0].position, 1);
        assert_eq!(status.unmapped[0].ch, '%');
        // The unmapped character still consumed a blank cell
        assert_eq!(display.cell_pattern(1), Some(0));
        assert_eq!(display.is_cell_active(1), Some(false));
    }

    #[test]
    fn test_display_char_returns_pattern() {
        let mut display = make_display();
        let pattern = display.display_char('q', 4, 0).unwrap();
        assert_eq!(pattern, braille::char_to_pattern('q'));
        assert_eq!(display.cell_pattern(4), Some(pattern));

        // Digits render bare, without a number sign
        let pattern = display.display_char('7', 5, 0).unwrap();
        assert_eq!(pattern, braille::char_to_pattern('g'));
    }

    #[test]
    fn test_display_mirrored_pattern() {
        let mut display = make_display();
        display.display_mirrored_pattern(0, 0x01, 0).unwrap();
        assert_eq!(display.cell_pattern(0), Some(0x08));
    }

    #[test]
    fn test_mirrored_text_commits_without_settle_delay() {
        let mut display = make_display();

        // Disabled, so the normal path would leave commits pending
        display.display_mirrored_text("a", 0, 0).unwrap();

        let mirrored = braille::mirror(braille::char_to_pattern('a'));
        assert_eq!(display.cell_pattern(0), Some(mirrored));
        // The mirror path forced the dots directly - no tick has run
        assert_eq!(display.current_cell_state(0), Some(mirrored));
        for dot in 0..DOTS_PER_CELL as u8 {
            assert!(!display.dot(0, dot).unwrap().action_pending);
        }
    }

    #[test]
    fn test_normal_text_does_wait_for_settle() {
        // Companion to the mirrored-text test: the plain path defers
        let mut display = make_display();
        display.display_text("a", 0, 0).unwrap();
        assert_eq!(display.current_cell_state(0), Some(0));
        assert!(display.pending_actions() > 0);
    }

    #[test]
    fn test_clear_display_converges_to_all_retracted() {
        let mut display = make_display();
        display.enable().unwrap();
        display.display_text("xyz", 0, 0).unwrap();
        display.update(1_000).unwrap();

        display.clear_display(2_000).unwrap();
        for cell in 0..10 {
            assert_eq!(display.cell_pattern(cell), Some(0));
            assert_eq!(display.is_cell_active(cell), Some(false));
        }
        // Pairs stay complementary even before the retractions commit
        assert_output_pairs_complementary(&display);

        display.update(2_000 + SETTLE).unwrap();
        for cell in 0..10 {
            assert_eq!(display.current_cell_state(cell), Some(0));
        }
        for dot in 0..display.config().dot_count() {
            assert!(!display.output().bit(output_index(dot, DriveLine::Raise)));
            assert!(display.output().bit(output_index(dot, DriveLine::Retract)));
        }
    }

    #[test]
    fn test_disable_gates_output_but_keeps_state() {
        let mut display = make_display();
        display.enable().unwrap();
        display.set_cell_pattern(0, 0x3F, 0).unwrap();
        let writes_before = display.sink().writes;

        display.disable().unwrap();
        assert!(!display.sink().output_enabled);

        // Refresh is a no-op while disabled
        display.refresh().unwrap();
        assert_eq!(display.sink().writes, writes_before);

        // Dot state survived
        assert_eq!(display.current_cell_state(0), Some(0x3F));

        // Re-enabling pushes the preserved frame
        display.enable().unwrap();
        assert!(display.sink().output_enabled);
        assert_eq!(display.sink().writes, writes_before + 1);
    }

    #[test]
    fn test_per_dot_deferred_and_immediate() {
        let mut display = make_display();
        display.enable().unwrap();

        display.raise_dot(1, 2, 0).unwrap();
        assert!(display.dot(1, 2).unwrap().action_pending);
        assert_eq!(display.current_cell_state(1), Some(0));

        display.update(SETTLE).unwrap();
        assert_eq!(display.current_cell_state(1), Some(1 << 2));

        let writes_before = display.sink().writes;
        display.raise_dot_immediate(1, 5, 10_000).unwrap();
        assert_eq!(display.current_cell_state(1), Some((1 << 2) | (1 << 5)));
        assert_eq!(display.sink().writes, writes_before + 1);

        display.lower_dot_immediate(1, 2, 10_001).unwrap();
        display.lower_dot(1, 5, 10_002).unwrap();
        display.update(10_002 + SETTLE).unwrap();
        assert_eq!(display.current_cell_state(1), Some(0));
    }

    #[test]
    fn test_per_dot_index_validation() {
        let mut display = make_display();
        assert_eq!(display.raise_dot(10, 0, 0), Err(DisplayError::InvalidCell));
        assert_eq!(display.raise_dot(0, 6, 0), Err(DisplayError::InvalidDot));
        assert_eq!(
            display.lower_dot_immediate(0, 99, 0),
            Err(DisplayError::InvalidDot)
        );
        assert_eq!(display.pending_actions(), 0);
    }

    #[test]
    fn test_update_without_due_actions_reports_idle() {
        let mut display = make_display();
        assert!(!display.update(0).unwrap());

        display.set_cell_pattern(0, 0x01, 0).unwrap();
        assert!(!display.update(SETTLE - 1).unwrap());
        assert!(display.update(SETTLE).unwrap());
        // Second pass finds nothing left to commit
        assert!(!display.update(SETTLE + 1).unwrap());
    }

    #[test]
    fn test_output_pairs_complementary_through_mixed_sequence() {
        let mut display = make_display();
        display.enable().unwrap();

        display.display_text("Go2", 0, 0).unwrap();
        display.raise_dot_immediate(9, 0, 10).unwrap();
        display.lower_dot(9, 0, 20).unwrap();
        display.update(20 + SETTLE).unwrap();
        display.display_mirrored_text("w9", 0, 30_000).unwrap();
        display.update(30_000 + SETTLE).unwrap();

        assert_output_pairs_complementary(&display);
    }

    #[test]
    fn test_release_returns_sink() {
        let mut display = make_display();
        display.enable().unwrap();
        let sink = display.release();
        assert!(sink.output_enabled);
        assert!(sink.writes > 0);
    }
}
