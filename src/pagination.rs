//! Page arithmetic and the link layout of the result pager.
//!
//! Pages are addressed by zero-based index here; the API request uses the
//! one-based page number (`index + 1`).

pub const PREVIOUS_LABEL: &str = "<<";
pub const NEXT_LABEL: &str = ">>";
pub const BREAK_LABEL: &str = "...";

/// Pages shown around the selected one.
pub const PAGE_RANGE_DISPLAYED: usize = 4;
/// Pages always shown at each end of the pager.
pub const MARGIN_PAGES_DISPLAYED: usize = 2;

/// Number of pages needed to hold `total_count` items.
pub fn page_count(total_count: u64, page_size: u32) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(u64::from(page_size)) as usize
}

/// One clickable (or disabled) element of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous { enabled: bool },
    Page { index: usize, active: bool },
    Break,
    Next { enabled: bool },
}

impl PageLink {
    pub fn label(&self) -> String {
        match self {
            PageLink::Previous { .. } => PREVIOUS_LABEL.to_string(),
            PageLink::Page { index, .. } => (index + 1).to_string(),
            PageLink::Break => BREAK_LABEL.to_string(),
            PageLink::Next { .. } => NEXT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_count: usize,
    selected: usize,
    page_range_displayed: usize,
    margin_pages_displayed: usize,
}

impl Pager {
    /// A pager over `page_count` pages with `selected` clamped into range.
    pub fn new(page_count: usize, selected: usize) -> Self {
        Pager {
            page_count,
            selected: selected.min(page_count.saturating_sub(1)),
            page_range_displayed: PAGE_RANGE_DISPLAYED,
            margin_pages_displayed: MARGIN_PAGES_DISPLAYED,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.page_count
    }

    pub fn previous(&self) -> Option<usize> {
        self.selected.checked_sub(1).filter(|i| self.contains(*i))
    }

    pub fn next(&self) -> Option<usize> {
        Some(self.selected + 1).filter(|i| self.contains(*i))
    }

    /// Full link row: previous, the visible page window with breaks, next.
    pub fn links(&self) -> Vec<PageLink> {
        let mut links = vec![PageLink::Previous {
            enabled: self.previous().is_some(),
        }];
        links.extend(self.page_links());
        links.push(PageLink::Next {
            enabled: self.next().is_some(),
        });
        links
    }

    fn page_link(&self, index: usize) -> PageLink {
        PageLink::Page {
            index,
            active: index == self.selected,
        }
    }

    fn page_links(&self) -> Vec<PageLink> {
        let count = self.page_count;
        let range = self.page_range_displayed;
        let margin = self.margin_pages_displayed;
        let selected = self.selected;

        if count <= range {
            return (0..count).map(|index| self.page_link(index)).collect();
        }

        // Shift the window so it keeps `range` pages near either end.
        let mut left = range / 2;
        let mut right = range - left;
        if selected > count - range / 2 {
            right = count - selected;
            left = range - right;
        } else if selected < range / 2 {
            left = selected;
            right = range - left;
        }

        let window_start = selected.saturating_sub(left);
        let window_end = if selected == 0 && range > 1 {
            selected + right - 1
        } else {
            selected + right
        };

        // Each entry keeps the index of the first page it stands for.
        let mut entries: Vec<(usize, PageLink)> = Vec::new();
        for index in 0..count {
            let page = index + 1;
            let visible = page <= margin
                || page > count - margin.min(count)
                || (index >= window_start && index <= window_end);

            if visible {
                entries.push((index, self.page_link(index)));
            } else if entries
                .last()
                .is_some_and(|(_, link)| *link != PageLink::Break)
            {
                entries.push((index, PageLink::Break));
            }
        }

        // A break hiding a single page shows that page instead.
        (0..entries.len())
            .map(|i| {
                let (index, link) = entries[i];
                let hides_one_page = link == PageLink::Break
                    && i > 0
                    && match (entries.get(i - 1), entries.get(i + 1)) {
                        (
                            Some((before, PageLink::Page { .. })),
                            Some((after, PageLink::Page { .. })),
                        ) => after - before <= 2,
                        _ => false,
                    };
                if hides_one_page {
                    self.page_link(index)
                } else {
                    link
                }
            })
            .collect()
    }
}
