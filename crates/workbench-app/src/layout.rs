//! Panel layout manager
//!
//! Owns the horizontal split of the workspace: each panel has a size
//! fraction bounded by its own `[min_size, max_size]`, and the visible
//! panels' fractions never sum to more than 1. Collapsed panels drop out of
//! the fraction budget and occupy a fixed number of columns instead.
//!
//! Every mutation is total: out-of-range sizes are clamped and unknown ids
//! are ignored, so callers never have to handle an error.

use crate::config::{LayoutSettings, PanelSettings};
use workbench_core::prelude::*;
use workbench_core::{PanelId, PanelKind};

/// Tolerance for fraction arithmetic
pub const SIZE_EPSILON: f64 = 1e-9;

/// One resizable/collapsible region
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub id: PanelId,
    pub kind: PanelKind,
    pub label: String,
    /// Share of the row while visible; remembered while collapsed
    pub size_fraction: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub collapsed: bool,
}

impl PanelState {
    fn clamp(&self, fraction: f64) -> f64 {
        fraction.clamp(self.min_size, self.max_size)
    }
}

/// The full set of panels, in left-to-right order
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    panels: Vec<PanelState>,
    collapsed_width: u16,
}

impl PanelLayout {
    /// Build a layout from panel defaults.
    ///
    /// Fails when the defaults can never satisfy the size invariant: bounds
    /// outside `(0, 1]`, `min_size > max_size`, or minimums of all panels
    /// summing to more than the full row.
    pub fn new(defaults: &[PanelSettings], collapsed_width: u16) -> Result<Self> {
        if defaults.is_empty() {
            return Err(Error::config_invalid("layout needs at least one panel"));
        }

        for entry in defaults {
            let bounds_ok = entry.min_size > 0.0
                && entry.max_size <= 1.0
                && entry.min_size <= entry.max_size
                && entry.size.is_finite();
            if !bounds_ok {
                return Err(Error::config_invalid(format!(
                    "{:?} panel bounds must satisfy 0 < min_size ({}) <= max_size ({}) <= 1",
                    entry.kind, entry.min_size, entry.max_size
                )));
            }
        }

        let min_total: f64 = defaults.iter().map(|s| s.min_size).sum();
        if min_total > 1.0 + SIZE_EPSILON {
            return Err(Error::config_invalid(format!(
                "panel minimum sizes sum to {:.2}, more than the full row",
                min_total
            )));
        }

        let panels = defaults
            .iter()
            .enumerate()
            .map(|(i, entry)| PanelState {
                id: PanelId(i),
                kind: entry.kind,
                label: entry
                    .label
                    .clone()
                    .unwrap_or_else(|| entry.kind.default_label().to_string()),
                size_fraction: entry.size.clamp(entry.min_size, entry.max_size),
                min_size: entry.min_size,
                max_size: entry.max_size,
                collapsed: entry.collapsed,
            })
            .collect();

        let mut layout = Self {
            panels,
            collapsed_width,
        };
        let visible = layout.visible_indices(None);
        layout.distribute(&visible, 1.0);
        Ok(layout)
    }

    /// Build a layout from settings, falling back to the preset's defaults
    /// when an explicit panel list is invalid.
    pub fn from_settings(settings: &LayoutSettings) -> Self {
        match Self::new(&settings.effective_panels(), settings.collapsed_width) {
            Ok(layout) => layout,
            Err(e) => {
                warn!("Invalid layout configuration, using preset: {}", e);
                Self::new(&settings.preset.panels(), settings.collapsed_width)
                    .unwrap_or_else(|_| Self::single_content(settings.collapsed_width))
            }
        }
    }

    fn single_content(collapsed_width: u16) -> Self {
        Self {
            panels: vec![PanelState {
                id: PanelId(0),
                kind: PanelKind::Content,
                label: PanelKind::Content.default_label().to_string(),
                size_fraction: 1.0,
                min_size: 0.1,
                max_size: 1.0,
                collapsed: false,
            }],
            collapsed_width,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────

    pub fn panels(&self) -> &[PanelState] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn collapsed_width(&self) -> u16 {
        self.collapsed_width
    }

    pub fn get(&self, id: PanelId) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.id == id)
    }

    /// First panel of the given kind
    pub fn find(&self, kind: PanelKind) -> Option<&PanelState> {
        self.panels.iter().find(|p| p.kind == kind)
    }

    pub fn is_collapsed(&self, id: PanelId) -> Option<bool> {
        self.get(id).map(|p| p.collapsed)
    }

    /// Ids of non-collapsed panels in layout order
    pub fn visible_ids(&self) -> Vec<PanelId> {
        self.panels
            .iter()
            .filter(|p| !p.collapsed)
            .map(|p| p.id)
            .collect()
    }

    /// Sum of visible panel fractions (always <= 1)
    pub fn visible_fraction_sum(&self) -> f64 {
        self.panels
            .iter()
            .filter(|p| !p.collapsed)
            .map(|p| p.size_fraction)
            .sum()
    }

    // ─────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────

    /// Resize a panel, clamping into its bounds and the room its visible
    /// siblings' minimums leave. Siblings absorb the difference in
    /// proportion to their current sizes.
    ///
    /// For a collapsed panel this only records the size it reopens with.
    pub fn set_size(&mut self, id: PanelId, fraction: f64) {
        let Some(idx) = self.index_of(id) else {
            trace!("set_size ignored for unknown {}", id);
            return;
        };
        if fraction.is_nan() {
            return;
        }

        let target = self.panels[idx].clamp(fraction);
        if self.panels[idx].collapsed {
            self.panels[idx].size_fraction = target;
            return;
        }

        let siblings = self.visible_indices(Some(idx));
        self.anchor(idx, target, &siblings);
        debug!(
            "{} resized to {:.3} (visible total {:.3})",
            id,
            self.panels[idx].size_fraction,
            self.visible_fraction_sum()
        );
    }

    /// Grow or shrink a panel by `delta`
    pub fn resize_by(&mut self, id: PanelId, delta: f64) {
        if let Some(current) = self.get(id).map(|p| p.size_fraction) {
            self.set_size(id, current + delta);
        }
    }

    /// Flip a panel's collapsed flag.
    ///
    /// Collapsing hands the freed share to the remaining visible panels;
    /// expanding reclaims the remembered share and shrinks the siblings.
    pub fn toggle_collapse(&mut self, id: PanelId) {
        let Some(idx) = self.index_of(id) else {
            trace!("toggle_collapse ignored for unknown {}", id);
            return;
        };

        let panel = &mut self.panels[idx];
        panel.collapsed = !panel.collapsed;
        let now_collapsed = panel.collapsed;

        if now_collapsed {
            let visible = self.visible_indices(None);
            self.distribute(&visible, 1.0);
        } else {
            let siblings = self.visible_indices(Some(idx));
            let target = self.panels[idx].size_fraction;
            self.anchor(idx, target, &siblings);
        }

        debug!(
            "{} {} (visible total {:.3})",
            id,
            if now_collapsed { "collapsed" } else { "expanded" },
            self.visible_fraction_sum()
        );
    }

    // ─────────────────────────────────────────────────────────────
    // Geometry
    // ─────────────────────────────────────────────────────────────

    /// Integer column widths for a row of `total` columns, in layout order.
    ///
    /// Collapsed panels get `collapsed_width` (while columns remain); visible
    /// panels split the rest by fraction. When the visible fractions fill
    /// the row, rounding leftovers go to the last visible panel. The widths
    /// never sum to more than `total`.
    pub fn column_widths(&self, total: u16) -> Vec<u16> {
        let mut widths = vec![0u16; self.panels.len()];

        let mut remaining = total;
        for (i, panel) in self.panels.iter().enumerate() {
            if panel.collapsed {
                let w = self.collapsed_width.min(remaining);
                widths[i] = w;
                remaining -= w;
            }
        }

        let available = remaining;
        let mut last_visible = None;
        for (i, panel) in self.panels.iter().enumerate() {
            if !panel.collapsed {
                let w = (panel.size_fraction * f64::from(available)).floor() as u16;
                let w = w.min(remaining);
                widths[i] = w;
                remaining -= w;
                last_visible = Some(i);
            }
        }

        if let Some(last) = last_visible {
            if self.visible_fraction_sum() >= 1.0 - SIZE_EPSILON {
                widths[last] += remaining;
            }
        }

        widths
    }

    // ─────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────

    fn index_of(&self, id: PanelId) -> Option<usize> {
        self.panels.iter().position(|p| p.id == id)
    }

    fn visible_indices(&self, except: Option<usize>) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter(|(i, p)| !p.collapsed && Some(*i) != except)
            .map(|(i, _)| i)
            .collect()
    }

    /// Pin panel `idx` at `target` (bounded by the siblings' minimums) and
    /// let the siblings share what is left.
    fn anchor(&mut self, idx: usize, target: f64, siblings: &[usize]) {
        let sibling_min: f64 = siblings.iter().map(|&i| self.panels[i].min_size).sum();
        let panel = &self.panels[idx];
        let room = (1.0 - sibling_min).max(panel.min_size);
        let target = panel.clamp(target).min(room);

        self.panels[idx].size_fraction = target;
        self.distribute(siblings, 1.0 - target);
    }

    /// Split `total` over `members` proportionally to their current sizes,
    /// respecting each member's bounds.
    ///
    /// Members whose proportional share falls below their minimum are pinned
    /// at the minimum first; only when no minimum is violated are members
    /// above their maximum pinned. Pinning in that order means later rounds
    /// never undo an earlier decision.
    fn distribute(&mut self, members: &[usize], total: f64) {
        if members.is_empty() {
            return;
        }

        let mut pinned: Vec<Option<f64>> = vec![None; members.len()];
        loop {
            let free: Vec<usize> = (0..members.len()).filter(|&k| pinned[k].is_none()).collect();
            if free.is_empty() {
                break;
            }

            let pinned_sum: f64 = pinned.iter().flatten().sum();
            let budget = (total - pinned_sum).max(0.0);
            let weight_sum: f64 = free
                .iter()
                .map(|&k| self.panels[members[k]].size_fraction)
                .sum();

            let shares: Vec<(usize, f64)> = free
                .iter()
                .map(|&k| {
                    let weight = if weight_sum > SIZE_EPSILON {
                        self.panels[members[k]].size_fraction / weight_sum
                    } else {
                        1.0 / free.len() as f64
                    };
                    (k, budget * weight)
                })
                .collect();

            let below: Vec<usize> = shares
                .iter()
                .filter(|(k, share)| *share < self.panels[members[*k]].min_size)
                .map(|(k, _)| *k)
                .collect();
            if !below.is_empty() {
                for k in below {
                    pinned[k] = Some(self.panels[members[k]].min_size);
                }
                continue;
            }

            let above: Vec<usize> = shares
                .iter()
                .filter(|(k, share)| *share > self.panels[members[*k]].max_size)
                .map(|(k, _)| *k)
                .collect();
            if !above.is_empty() {
                for k in above {
                    pinned[k] = Some(self.panels[members[k]].max_size);
                }
                continue;
            }

            for (k, share) in shares {
                pinned[k] = Some(share);
            }
        }

        for (k, &idx) in members.iter().enumerate() {
            if let Some(size) = pinned[k] {
                self.panels[idx].size_fraction = size;
            }
        }
    }
}
