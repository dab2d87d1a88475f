//! # Vitrine Core Library
//!
//! This crate provides the core functionality for the Vitrine terminal
//! portfolio gallery. It contains the interactive state machines, data
//! model, and image loading that are independent of any specific user
//! interface.
//!
//! ## Modules
//!
//! - `carousel`: slide traversal state machine for one viewing session
//! - `lightbox`: zoomable single-image overlay nested inside a carousel
//! - `portfolio`: project list data model and TOML loading
//! - `loader`: off-thread image decoding
//! - `settings`: application configuration management
//! - `theme`: UI theming system

pub mod carousel;
pub mod lightbox;
pub mod loader;
pub mod portfolio;
pub mod settings;
pub mod theme;

#[cfg(test)]
mod tests {
    use crate::carousel::{Carousel, Direction, LoadState};
    use crate::lightbox::{ZoomOrigin, ZOOM_SCALE};
    use crate::settings::Settings;
    use crate::theme::ThemeVariant;

    fn three_slides() -> Carousel {
        Carousel::open(
            vec!["a.png".to_string(), "b.png".to_string(), "c.png".to_string()],
            "Demo",
        )
    }

    #[test]
    fn open_starts_at_first_slide() {
        let carousel = three_slides();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Still);
        assert_eq!(carousel.load_state(), LoadState::Loading);
        assert_eq!(carousel.current_image(), Some("a.png"));
    }

    #[test]
    fn navigation_walkthrough_with_wrapping() {
        let mut carousel = three_slides();

        carousel.next();
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);

        carousel.next();
        assert_eq!(carousel.current_index(), 2);

        // Wraps last -> first, still travelling forward.
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);

        // Wraps first -> last going backward.
        carousel.previous();
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn index_stays_in_bounds_under_any_walk() {
        let mut carousel = three_slides();
        for step in 0..100 {
            if step % 3 == 0 {
                carousel.previous();
            } else {
                carousel.next();
            }
            assert!(carousel.current_index() < carousel.len());
        }
    }

    #[test]
    fn single_slide_navigation_stays_put() {
        let mut carousel = Carousel::open(vec!["x.png".to_string()], "Solo");
        carousel.next();
        assert_eq!(carousel.current_index(), 0);
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn jump_sets_index_exactly() {
        let mut carousel = three_slides();
        carousel.previous(); // direction Backward, index 2
        assert!(carousel.jump_to(1));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Backward);

        assert!(carousel.jump_to(2));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.direction(), Direction::Forward);
        assert_eq!(carousel.load_state(), LoadState::Loading);
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut carousel = three_slides();
        carousel.next();
        assert!(!carousel.jump_to(3));
        assert!(!carousel.jump_to(usize::MAX));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut carousel = Carousel::open(Vec::new(), "Empty");
        assert!(carousel.is_empty());
        assert_eq!(carousel.current_image(), None);

        carousel.next();
        carousel.previous();
        assert!(!carousel.jump_to(0));
        carousel.open_lightbox();
        assert!(carousel.lightbox().is_none());
    }

    #[test]
    fn lightbox_opens_over_displayed_slide() {
        let mut carousel = three_slides();
        carousel.next();
        carousel.open_lightbox();
        let lightbox = carousel.lightbox().unwrap();
        assert_eq!(lightbox.image(), "b.png");
        assert!(!lightbox.is_zoomed());
    }

    #[test]
    fn closing_carousel_closes_lightbox() {
        let mut carousel = three_slides();
        carousel.open_lightbox();
        assert!(carousel.lightbox().is_some());

        carousel.close();
        assert!(carousel.lightbox().is_none());
    }

    #[test]
    fn double_toggle_zoom_round_trips() {
        let mut carousel = three_slides();
        carousel.open_lightbox();
        let lightbox = carousel.lightbox_mut().unwrap();

        lightbox.toggle_zoom();
        lightbox.pointer_move(30.0, 60.0, 100.0, 100.0);
        let anchored = lightbox.origin();

        lightbox.toggle_zoom();
        assert!(!lightbox.is_zoomed());
        // Toggling alone never moves the anchor.
        assert_eq!(lightbox.origin(), anchored);
        lightbox.toggle_zoom();
        assert!(lightbox.is_zoomed());
        assert_eq!(lightbox.origin(), anchored);
    }

    #[test]
    fn pointer_move_tracks_percentages() {
        let mut carousel = three_slides();
        carousel.open_lightbox();
        let lightbox = carousel.lightbox_mut().unwrap();
        assert_eq!(lightbox.origin(), ZoomOrigin { x: 50.0, y: 50.0 });

        // Ignored while unzoomed.
        lightbox.pointer_move(10.0, 10.0, 100.0, 100.0);
        assert_eq!(lightbox.origin(), ZoomOrigin { x: 50.0, y: 50.0 });

        lightbox.toggle_zoom();
        lightbox.pointer_move(25.0, 75.0, 100.0, 100.0);
        assert_eq!(lightbox.origin(), ZoomOrigin { x: 25.0, y: 75.0 });

        // Positions are clamped to the rendered bounds.
        lightbox.pointer_move(500.0, -4.0, 100.0, 100.0);
        assert_eq!(lightbox.origin(), ZoomOrigin { x: 100.0, y: 0.0 });
    }

    #[test]
    fn zoom_window_anchors_at_origin() {
        let mut carousel = three_slides();
        carousel.open_lightbox();
        let lightbox = carousel.lightbox_mut().unwrap();
        lightbox.toggle_zoom();

        // Centered origin: the half-size window sits in the middle.
        let window = lightbox.zoom_window(ZOOM_SCALE);
        assert!((window.x - 0.25).abs() < 1e-6);
        assert!((window.y - 0.25).abs() < 1e-6);
        assert!((window.width - 0.5).abs() < 1e-6);

        // Corner origins pin the window to the matching edge.
        lightbox.pointer_move(0.0, 0.0, 100.0, 100.0);
        let window = lightbox.zoom_window(ZOOM_SCALE);
        assert_eq!(window.x, 0.0);
        assert_eq!(window.y, 0.0);

        lightbox.pointer_move(100.0, 100.0, 100.0, 100.0);
        let window = lightbox.zoom_window(ZOOM_SCALE);
        assert!((window.x + window.width - 1.0).abs() < 1e-6);
        assert!((window.y + window.height - 1.0).abs() < 1e-6);

        // Scale 1 shows the whole image regardless of the anchor.
        let window = lightbox.zoom_window(1.0);
        assert_eq!(window.x, 0.0);
        assert_eq!(window.width, 1.0);
    }

    #[test]
    fn stale_load_completion_is_ignored() {
        let mut carousel = three_slides();
        carousel.next(); // index 1, loading

        // Completion for the slide we already left.
        carousel.image_loaded(0);
        assert_eq!(carousel.load_state(), LoadState::Loading);

        carousel.image_loaded(1);
        assert_eq!(carousel.load_state(), LoadState::Ready);
    }

    #[test]
    fn load_failure_clears_spinner() {
        let mut carousel = three_slides();
        carousel.image_failed(0);
        assert_eq!(carousel.load_state(), LoadState::Failed);

        // A failure for a stale index changes nothing.
        carousel.next();
        carousel.image_failed(0);
        assert_eq!(carousel.load_state(), LoadState::Loading);
    }

    #[test]
    fn navigation_resets_loading_state() {
        let mut carousel = three_slides();
        carousel.image_loaded(0);
        assert_eq!(carousel.load_state(), LoadState::Ready);

        carousel.next();
        assert_eq!(carousel.load_state(), LoadState::Loading);
    }

    #[test]
    fn reopening_lightbox_resets_zoom_state() {
        let mut carousel = three_slides();
        carousel.open_lightbox();
        carousel.lightbox_mut().unwrap().toggle_zoom();
        carousel.close_lightbox();

        carousel.open_lightbox();
        assert!(!carousel.lightbox().unwrap().is_zoomed());
    }

    #[test]
    fn settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, ThemeVariant::AndesNight);
        assert_eq!(settings.portfolio_path, "portfolio.toml");
        assert_eq!(settings.tick_rate_ms, 50);
    }
}
