use std::rc::Rc;

use tracing::{debug, info};

use crate::error::{CragError, Result};
use crate::layout::SplitLayout;
use crate::machine::{InteractionStateMachine, SessionMode, Transition};
use crate::photo::commons::{image_url, Feature};
use crate::photo::{select_resolution, PhotoKey, ResolutionChoice};
use crate::route::Route;
use crate::scroll::{photo_replacement, route_index_at_scroll, ScrollShadow};
use crate::viewport::ViewportState;

use super::config::SessionConfig;
use super::providers::{
    ListenerGuard, Navigator, PhotoDataProvider, PhotoRelatedData, WindowEventKind,
    WindowEventSource,
};
use super::state::SessionState;
use super::types::{ScrollEvent, SessionView, WindowEvent};

/// Composition root of one photo/route viewing session.
///
/// Every UI event enters through one of the `&mut self` handlers. Handlers
/// never fail: invalid requests are dropped and logged at debug level.
pub struct Session {
    config: SessionConfig,
    feature: Feature,
    state: SessionState,
    machine: InteractionStateMachine,
    layout: SplitLayout,
    shadow: ScrollShadow,
    resolution: ResolutionChoice,
    background_image_url: Option<String>,
    /// Photo the navigator was asked to switch to, until it loads.
    pending_swap: Option<PhotoKey>,
    is_map_visible: bool,
    photo_provider: Box<dyn PhotoDataProvider>,
    navigator: Box<dyn Navigator>,
    window_listener: Option<ListenerGuard>,
}

impl Session {
    /// Start a session on `feature`, showing `photo` or else the first crag
    /// photo listed on the feature.
    pub fn new(
        config: SessionConfig,
        feature: Feature,
        photo: Option<PhotoKey>,
        viewport: ViewportState,
        photo_provider: Box<dyn PhotoDataProvider>,
        navigator: Box<dyn Navigator>,
    ) -> Result<Self> {
        config.validate()?;

        let crag_photos = feature.crag_photos();
        let photo_path = photo.or_else(|| crag_photos.first().cloned());
        let layout = SplitLayout::new(
            viewport.container_height(),
            config.layout.default_split_height,
        );

        let mut state = SessionState {
            photo_path,
            viewport,
            ..SessionState::default()
        };
        state.photos.prepare(&crag_photos);

        let resolution = select_resolution(
            &config.resolution,
            &state.viewport,
            state.photo_path.as_ref(),
            &state.photos,
        );

        let mut session = Self {
            config,
            feature,
            state,
            machine: InteractionStateMachine::new(),
            layout,
            shadow: ScrollShadow::default(),
            resolution,
            background_image_url: None,
            pending_swap: None,
            is_map_visible: false,
            photo_provider,
            navigator,
            window_listener: None,
        };

        info!(
            feature = %session.feature.link(),
            photos = session.state.photos.len(),
            photo = ?session.state.photo_path.as_ref().map(PhotoKey::as_str),
            "Climbing session started"
        );
        session.photo_provider.prepare_photos(&crag_photos);
        session.fix_background_url();
        session.load_photo_related_data();
        Ok(session)
    }

    /// Register the window resize/orientation listener. Only the first call
    /// registers; the listener is removed when the session is dropped.
    pub fn attach_window_events(&mut self, source: Rc<dyn WindowEventSource>) {
        if self.window_listener.is_some() {
            debug!("Window listener already attached");
            return;
        }
        let guard = ListenerGuard::register(
            source,
            &[WindowEventKind::Resize, WindowEventKind::OrientationChange],
        );
        debug!(id = guard.id().0, "Window listener attached");
        self.window_listener = Some(guard);
    }

    pub fn detach_window_events(&mut self) {
        self.window_listener = None;
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn mode(&self) -> SessionMode {
        self.machine.mode()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.machine.selected_index()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.machine.is_edit_mode()
    }

    pub fn resolution(&self) -> ResolutionChoice {
        self.resolution
    }

    pub fn layout(&self) -> &SplitLayout {
        &self.layout
    }

    pub fn is_photo_loading(&self) -> bool {
        self.pending_swap.is_some()
    }

    pub fn image_url(&self) -> Option<String> {
        self.state
            .photo_path
            .as_ref()
            .map(|p| image_url(p, self.resolution.display))
    }

    pub fn background_image_url(&self) -> Option<&str> {
        self.background_image_url.as_deref()
    }

    pub fn view(&self) -> SessionView {
        let photo = self.state.photo_path.as_ref();
        let mode = self.machine.mode();
        let resolution_loaded =
            photo.is_some_and(|p| self.state.photos.is_loaded(p, self.resolution.target));
        let first_loaded = photo.is_some_and(|p| self.state.photos.has_any_loaded(p));

        SessionView {
            mode,
            selected_index: mode.selected_index(),
            resolution: self.resolution.display,
            target_resolution: self.resolution.target,
            image_url: self.image_url(),
            fetch_url: photo
                .filter(|_| self.resolution.needs_fetch())
                .map(|p| image_url(p, self.resolution.target)),
            background_image_url: self.background_image_url.clone(),
            pane_height: self.layout.effective_height(),
            expander: self.layout.expander(),
            is_photo_loading: self.is_photo_loading(),
            show_mini_loading: !resolution_loaded || self.is_photo_loading(),
            show_full_loading: !first_loaded,
            routes_layer_visible: !self.layout.is_dragging() && !self.state.routes_loading,
            show_edit_controls: mode.is_edit(),
            is_map_visible: self.is_map_visible,
            shadow_top: self.shadow.top,
            shadow_bottom: self.shadow.bottom,
        }
    }

    // -----------------------------------------------------------------------
    // Route data provider
    // -----------------------------------------------------------------------

    pub fn set_routes(&mut self, routes: Vec<Route>) {
        self.state.routes = routes;
        let total = self.state.routes.len();
        if self.selected_index().is_some_and(|i| i >= total) {
            debug!(total, "Selected route vanished, clearing selection");
            self.clear_selection();
        }
    }

    pub fn set_route_offsets(&mut self, offsets: Vec<f32>) {
        self.state.route_offsets = offsets;
    }

    pub fn set_routes_loading(&mut self, loading: bool) {
        self.state.routes_loading = loading;
    }

    // -----------------------------------------------------------------------
    // Mode transitions
    // -----------------------------------------------------------------------

    pub fn select_route(&mut self, index: usize) -> Transition {
        let transition = self.machine.select_route(index, self.state.routes.len());
        if transition.changes_selection() {
            self.replace_photo_if_needed(index);
        }
        self.after_transition(transition)
    }

    pub fn enter_edit_mode(&mut self) -> Transition {
        let transition = self.machine.enter_edit_mode();
        self.after_transition(transition)
    }

    pub fn exit_edit_mode(&mut self) -> Transition {
        let transition = self.machine.exit_edit_mode();
        self.after_transition(transition)
    }

    pub fn clear_selection(&mut self) -> Transition {
        let transition = self.machine.clear_selection();
        self.after_transition(transition)
    }

    /// The external edit toggle changed (or was re-emitted).
    pub fn set_edit_mode(&mut self, is_edit_mode: bool) -> Transition {
        let transition = self.machine.reconcile_edit_flag(is_edit_mode);
        self.after_transition(transition)
    }

    /// Run `edit` on the selected route and the active photo. Does nothing
    /// outside edit mode.
    pub fn edit_selected_route<F>(&mut self, edit: F) -> Result<bool>
    where
        F: FnOnce(&mut Route, &PhotoKey) -> Result<()>,
    {
        let SessionMode::EditRoute(index) = self.machine.mode() else {
            debug!(mode = %self.machine.mode(), "Route edit outside edit mode ignored");
            return Ok(false);
        };
        let Some(photo) = self.state.photo_path.clone() else {
            return Ok(false);
        };
        let total = self.state.routes.len();
        let route = self
            .state
            .routes
            .get_mut(index)
            .ok_or(CragError::RouteIndexOutOfRange { index, total })?;
        edit(route, &photo)?;
        self.load_photo_related_data();
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Route list scrolling
    // -----------------------------------------------------------------------

    pub fn on_scroll(&mut self, event: ScrollEvent) {
        self.shadow
            .update(event.scroll_top, event.client_height, event.scroll_height);

        if !self.config.settings.select_routes_by_scrolling {
            return;
        }
        if !matches!(self.machine.mode(), SessionMode::RouteSelected(_)) {
            return;
        }

        let index = route_index_at_scroll(
            event.scroll_top,
            self.config.scroll.row_height,
            self.config.scroll.detection_margin,
            &self.state.route_offsets,
        );
        if let Some(index) = index {
            self.select_route(index);
        }
    }

    fn replace_photo_if_needed(&mut self, index: usize) {
        let photos = self.state.route_photos(index);
        let target = photo_replacement(
            &photos,
            self.state.photo_path.as_ref(),
            self.pending_swap.is_some(),
        );
        let Some(target) = target.cloned() else {
            return;
        };
        let url = self.feature.photo_url(&target);
        info!(route = index, photo = %target, %url, "Replacing photo for selected route");
        self.navigator.replace(&url);

        // A cached photo reports no further loads, so switch to it now.
        if self.state.photos.has_any_loaded(&target) {
            debug!(photo = %target, "Target photo already loaded");
            self.switch_photo(target);
        } else {
            self.pending_swap = Some(target);
        }
    }

    /// Keep a selected route's photo on screen. Edit mode is left alone so a
    /// route can be drawn onto another photo.
    fn sync_selected_photo(&mut self) {
        if let SessionMode::RouteSelected(index) = self.machine.mode() {
            self.replace_photo_if_needed(index);
        }
    }

    // -----------------------------------------------------------------------
    // Split pane
    // -----------------------------------------------------------------------

    pub fn on_drag_start(&mut self) {
        self.layout.on_drag_start();
    }

    pub fn on_drag_finish(&mut self, new_height: f32) {
        if self.layout.on_drag_finish(new_height) {
            self.load_photo_related_data();
        }
    }

    /// Expand/collapse control: return to the default pane height.
    pub fn reset_split_height(&mut self) {
        if self.layout.reset() {
            self.load_photo_related_data();
        }
    }

    pub fn toggle_map(&mut self) {
        self.is_map_visible = !self.is_map_visible;
    }

    // -----------------------------------------------------------------------
    // Viewport, zoom and photos
    // -----------------------------------------------------------------------

    pub fn handle_window_event(&mut self, event: WindowEvent) {
        let (WindowEvent::Resize { width, height }
        | WindowEvent::OrientationChange { width, height }) = event;
        self.resize(width, height);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.viewport.resize(width, height);
        self.layout
            .set_container_height(self.state.viewport.container_height());
        self.refresh_resolution();
        self.load_photo_related_data();
    }

    pub fn set_editor_position(&mut self, y: f32) {
        self.state.viewport.set_editor_y(y);
        if self
            .layout
            .set_container_height(self.state.viewport.container_height())
        {
            self.load_photo_related_data();
        }
    }

    pub fn set_zoom(&mut self, scale: f32) {
        self.state.viewport.set_zoom(scale);
        self.refresh_resolution();
    }

    /// The host switched the displayed photo (e.g. after a navigation).
    pub fn set_photo_path(&mut self, photo: PhotoKey) {
        if self.state.photo_path.as_ref() == Some(&photo) {
            return;
        }
        info!(%photo, "Active photo changed");
        self.switch_photo(photo);
        self.sync_selected_photo();
        self.load_photo_related_data();
    }

    /// The photo loader finished fetching `resolution` of `photo`.
    pub fn photo_loaded(&mut self, photo: &PhotoKey, resolution: u32) {
        self.state.photos.mark_loaded(photo, resolution);
        debug!(%photo, resolution, "Photo resolution loaded");

        if self.pending_swap.as_ref() != Some(photo) {
            self.refresh_resolution();
            return;
        }
        info!(%photo, "Photo swap complete");
        self.pending_swap = None;
        if self.state.photo_path.as_ref() == Some(photo) {
            self.refresh_resolution();
            // The selection may have moved on while the swap was in flight.
            let shown = self.state.photo_path.clone();
            self.sync_selected_photo();
            if self.state.photo_path != shown {
                self.load_photo_related_data();
            }
        } else {
            self.set_photo_path(photo.clone());
        }
    }

    fn switch_photo(&mut self, photo: PhotoKey) {
        self.state.photo_path = Some(photo);
        self.fix_background_url();
        self.refresh_resolution();
    }

    fn refresh_resolution(&mut self) {
        let choice = select_resolution(
            &self.config.resolution,
            &self.state.viewport,
            self.state.photo_path.as_ref(),
            &self.state.photos,
        );
        if choice != self.resolution {
            debug!(
                target_res = choice.target,
                display = choice.display,
                loaded = choice.target_loaded,
                "Photo resolution changed"
            );
            self.resolution = choice;
        }
    }

    fn fix_background_url(&mut self) {
        if self.background_image_url.is_none() {
            self.background_image_url = self.image_url();
        }
    }

    fn after_transition(&mut self, transition: Transition) -> Transition {
        if transition.changes_selection() {
            self.load_photo_related_data();
        }
        transition
    }

    fn load_photo_related_data(&mut self) {
        let data = PhotoRelatedData {
            photo: self.state.photo_path.clone(),
            resolution: self.resolution,
            selected_index: self.machine.selected_index(),
            pane_height: self.layout.effective_height(),
            viewport: self.state.viewport,
        };
        self.photo_provider.load_photo_related_data(&data);
    }
}
