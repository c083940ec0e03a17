//! Gallery screen
//!
//! Owns all view state: the search text, the active filters, the full list
//! of photos fetched on mount and the filtered list shown in the grid.
//! Every filter change recomputes the filtered list before the next draw.
use iced::widget::{column, container};
use iced::{Element, Length, Task};
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::state::data::{Asset, AssetsOptions};
use crate::state::filters::{apply_filters, ActiveFilters, EvenIndexPlaceholder};
use crate::state::library::{load_library, LoadOutcome, PhotoLibrary};
use crate::ui::{grid, header, search, style};

pub const TITLE: &str = "PhotoFinder";

/// Identifies one mounting of the gallery screen
pub type MountId = u64;

#[derive(Debug, Clone)]
pub enum Message {
    /// The mount-time permission request and fetch finished
    Loaded {
        mount_id: MountId,
        outcome: LoadOutcome,
    },
    /// User typed in the search bar
    SearchChanged(String),
    /// User pressed Enter in the search bar
    CommitFilter,
    /// User closed the chip at this position
    RemoveFilter(usize),
}

pub struct Gallery {
    mount_id: MountId,
    search_text: String,
    filters: ActiveFilters,
    /// Everything fetched on mount, in library order
    all_photos: Vec<Asset>,
    /// Subset of `all_photos` currently shown
    filtered_photos: Vec<Asset>,
    // Content matching is not implemented yet.
    matcher: EvenIndexPlaceholder,
}

impl Gallery {
    /// Create the screen and start its one-shot library load
    pub fn mount(
        mount_id: MountId,
        library: Arc<dyn PhotoLibrary>,
        options: AssetsOptions,
    ) -> (Self, Task<Message>) {
        let gallery = Gallery {
            mount_id,
            search_text: String::new(),
            filters: ActiveFilters::new(),
            all_photos: Vec::new(),
            filtered_photos: Vec::new(),
            matcher: EvenIndexPlaceholder,
        };

        let load = Task::perform(load_library(library, options), move |outcome| {
            Message::Loaded { mount_id, outcome }
        });

        (gallery, load)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded { mount_id, outcome } => {
                if mount_id != self.mount_id {
                    debug!(
                        mount_id,
                        current = self.mount_id,
                        "Discarding load for an unmounted gallery"
                    );
                    return;
                }
                self.apply_load(outcome);
            }
            Message::SearchChanged(query) => {
                self.search_text = query;
            }
            Message::CommitFilter => match self.filters.commit(&self.search_text) {
                Ok(()) => {
                    self.search_text.clear();
                    self.refilter();
                }
                Err(reason) => {
                    debug!(?reason, query = %self.search_text, "Ignoring filter submission");
                }
            },
            Message::RemoveFilter(index) => {
                if self.filters.remove(index).is_some() {
                    self.refilter();
                }
            }
        }
    }

    /// Store the mount-time load.
    ///
    /// The loaded list goes through the active filters instead of being shown
    /// whole, so chips committed while the load was in flight already apply.
    fn apply_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded(page) => {
                self.all_photos = page.assets;
                self.refilter();
            }
            LoadOutcome::NotGranted(status) => {
                info!(?status, "Showing empty gallery");
            }
            LoadOutcome::Failed(e) => {
                error!(error = %e, "Failed to fetch photos");
            }
        }
    }

    fn refilter(&mut self) {
        self.filtered_photos = apply_filters(&self.matcher, &self.all_photos, &self.filters);
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn filters(&self) -> &[String] {
        self.filters.terms()
    }

    #[cfg(test)]
    pub fn all_photos(&self) -> &[Asset] {
        &self.all_photos
    }

    pub fn filtered_photos(&self) -> &[Asset] {
        &self.filtered_photos
    }

    /// Build the screen for a window `viewport_width` pixels wide
    pub fn view(&self, viewport_width: f32) -> Element<Message> {
        let content = column![
            header::banner(TITLE),
            search::search_panel(
                self.search_text(),
                self.filters(),
                Message::SearchChanged,
                Message::CommitFilter,
                Message::RemoveFilter,
            ),
            grid::photo_grid(self.filtered_photos(), viewport_width),
        ];

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::screen)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::state::data::fixtures::assets;
    use crate::state::data::{AssetPage, PermissionStatus};
    use crate::state::library::load_library_blocking;

    /// In-memory library with a fixed permission answer
    struct FakeLibrary {
        status: PermissionStatus,
        photos: Vec<Asset>,
    }

    impl PhotoLibrary for FakeLibrary {
        fn request_permission(&self) -> PermissionStatus {
            self.status
        }

        fn get_assets(&self, options: AssetsOptions) -> Result<AssetPage> {
            let assets: Vec<Asset> = self.photos.iter().take(options.first).cloned().collect();
            Ok(AssetPage {
                end_cursor: assets.last().map(|a| a.id),
                has_next_page: self.photos.len() > assets.len(),
                total_count: self.photos.len(),
                assets,
            })
        }
    }

    fn mounted(status: PermissionStatus, count: u64) -> Gallery {
        let library = Arc::new(FakeLibrary {
            status,
            photos: assets(count),
        });
        let (mut gallery, _load) = Gallery::mount(1, library.clone(), AssetsOptions::default());
        let outcome = load_library_blocking(&*library, AssetsOptions::default());
        gallery.update(Message::Loaded { mount_id: 1, outcome });
        gallery
    }

    fn submit(gallery: &mut Gallery, text: &str) {
        gallery.update(Message::SearchChanged(text.to_string()));
        gallery.update(Message::CommitFilter);
    }

    fn shown_ids(gallery: &Gallery) -> Vec<u64> {
        gallery.filtered_photos().iter().map(|a| a.id.0).collect()
    }

    #[test]
    fn test_mount_starts_empty() {
        let library = Arc::new(FakeLibrary {
            status: PermissionStatus::Granted,
            photos: assets(3),
        });
        let (gallery, _load) = Gallery::mount(7, library, AssetsOptions::default());
        assert!(gallery.all_photos().is_empty());
        assert!(gallery.filtered_photos().is_empty());
        assert_eq!(gallery.search_text(), "");
    }

    #[test]
    fn test_granted_load_fills_both_lists() {
        let gallery = mounted(PermissionStatus::Granted, 4);
        assert_eq!(gallery.all_photos().len(), 4);
        assert_eq!(gallery.filtered_photos(), gallery.all_photos());
    }

    #[test]
    fn test_load_caps_at_first_hundred() {
        let gallery = mounted(PermissionStatus::Granted, 130);
        assert_eq!(gallery.all_photos().len(), 100);
    }

    #[test]
    fn test_not_granted_stays_empty() {
        for status in [PermissionStatus::Denied, PermissionStatus::Undetermined] {
            let gallery = mounted(status, 4);
            assert!(gallery.all_photos().is_empty());
            assert!(gallery.filtered_photos().is_empty());
        }
    }

    #[test]
    fn test_failed_fetch_stays_empty() {
        let library = Arc::new(FakeLibrary {
            status: PermissionStatus::Granted,
            photos: Vec::new(),
        });
        let (mut gallery, _load) = Gallery::mount(1, library, AssetsOptions::default());
        gallery.update(Message::Loaded {
            mount_id: 1,
            outcome: LoadOutcome::Failed("disk went away".to_string()),
        });
        assert!(gallery.filtered_photos().is_empty());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let library = Arc::new(FakeLibrary {
            status: PermissionStatus::Granted,
            photos: assets(3),
        });
        let (mut gallery, _load) = Gallery::mount(2, library.clone(), AssetsOptions::default());
        let outcome = load_library_blocking(&*library, AssetsOptions::default());
        gallery.update(Message::Loaded { mount_id: 1, outcome });
        assert!(gallery.all_photos().is_empty());
    }

    #[test]
    fn test_typing_does_not_filter() {
        let mut gallery = mounted(PermissionStatus::Granted, 5);
        gallery.update(Message::SearchChanged("  beach ".to_string()));
        assert_eq!(gallery.search_text(), "  beach ");
        assert!(gallery.filters().is_empty());
        assert_eq!(gallery.filtered_photos().len(), 5);
    }

    #[test]
    fn test_commit_appends_and_clears_search() {
        let mut gallery = mounted(PermissionStatus::Granted, 5);
        submit(&mut gallery, "beach");
        submit(&mut gallery, " sunset ");
        assert_eq!(gallery.filters(), ["beach", "sunset"]);
        assert_eq!(gallery.search_text(), "");
    }

    #[test]
    fn test_rejected_commit_keeps_state() {
        let mut gallery = mounted(PermissionStatus::Granted, 5);
        submit(&mut gallery, "beach");

        submit(&mut gallery, "beach");
        assert_eq!(gallery.filters(), ["beach"]);
        assert_eq!(gallery.search_text(), "beach");

        submit(&mut gallery, "   ");
        assert_eq!(gallery.filters(), ["beach"]);
    }

    // Placeholder filtering: any active filter keeps only even positions.
    #[test]
    fn test_placeholder_filtering_through_screen() {
        let mut gallery = mounted(PermissionStatus::Granted, 5);
        submit(&mut gallery, "dogs");
        assert_eq!(shown_ids(&gallery), [0, 2, 4]);

        submit(&mut gallery, "cats");
        assert_eq!(shown_ids(&gallery), [0, 2, 4]);
    }

    #[test]
    fn test_removing_last_filter_restores_everything() {
        let mut gallery = mounted(PermissionStatus::Granted, 5);
        submit(&mut gallery, "a");
        submit(&mut gallery, "b");

        gallery.update(Message::RemoveFilter(0));
        assert_eq!(gallery.filters(), ["b"]);
        assert_eq!(shown_ids(&gallery), [0, 2, 4]);

        gallery.update(Message::RemoveFilter(0));
        assert!(gallery.filters().is_empty());
        assert_eq!(shown_ids(&gallery), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut gallery = mounted(PermissionStatus::Granted, 3);
        submit(&mut gallery, "a");
        gallery.update(Message::RemoveFilter(3));
        assert_eq!(gallery.filters(), ["a"]);
    }

    #[test]
    fn test_filters_committed_before_load_apply_after_it() {
        let library = Arc::new(FakeLibrary {
            status: PermissionStatus::Granted,
            photos: assets(4),
        });
        let (mut gallery, _load) = Gallery::mount(1, library.clone(), AssetsOptions::default());
        submit(&mut gallery, "early");

        let outcome = load_library_blocking(&*library, AssetsOptions::default());
        gallery.update(Message::Loaded { mount_id: 1, outcome });
        assert_eq!(shown_ids(&gallery), [0, 2]);
    }
}
