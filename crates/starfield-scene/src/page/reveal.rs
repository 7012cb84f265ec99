use std::time::Duration;

use starfield_config::schema::RevealGroupConfig;

/// An item that just became visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub group: String,
    pub index: usize,
    /// Transition delay: position in the group times the group stagger.
    pub delay: Duration,
}

#[derive(Debug, Clone)]
struct RevealItem {
    group: usize,
    index: usize,
    top: f32,
    height: f32,
    delay: Duration,
    visible: bool,
}

/// One-way visibility tracking for staggered reveal groups.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    groups: Vec<String>,
    items: Vec<RevealItem>,
    threshold: f32,
    margin: f32,
}

impl RevealTracker {
    pub fn new(groups: &[RevealGroupConfig], threshold: f32, margin: f32) -> Self {
        let mut items = Vec::new();
        for (g, group) in groups.iter().enumerate() {
            for (index, span) in group.items.iter().enumerate() {
                items.push(RevealItem {
                    group: g,
                    index,
                    top: span.top,
                    height: span.height,
                    delay: Duration::from_secs_f32(index as f32 * group.stagger_secs.max(0.0)),
                    visible: false,
                });
            }
        }

        Self {
            groups: groups.iter().map(|g| g.name.clone()).collect(),
            items,
            threshold,
            margin,
        }
    }

    /// Mark every item that now meets the threshold and return the newly
    /// visible ones in document order.
    pub fn update(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<Reveal> {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height - self.margin;
        let mut revealed = Vec::new();

        for item in self.items.iter_mut().filter(|i| !i.visible) {
            let ratio = visible_fraction(item.top, item.height, view_top, view_bottom);
            if ratio > 0.0 && ratio >= self.threshold {
                item.visible = true;
                revealed.push(Reveal {
                    group: self.groups[item.group].clone(),
                    index: item.index,
                    delay: item.delay,
                });
            }
        }
        revealed
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|i| i.visible).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item spanning page offset `y`, if any.
    pub fn item_at(&self, y: f32) -> Option<(&str, usize)> {
        self.items
            .iter()
            .find(|i| y >= i.top && y < i.top + i.height)
            .map(|i| (self.groups[i.group].as_str(), i.index))
    }
}

/// Fraction of `[top, top + height)` inside `[view_top, view_bottom)`.
fn visible_fraction(top: f32, height: f32, view_top: f32, view_bottom: f32) -> f32 {
    if height <= 0.0 {
        return if top >= view_top && top < view_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}
