//! Try-on flow state machine.
//!
//! Defines a pure state transition function for the screen flow. Async work
//! (category detection, the processing pipeline, gallery persistence) is
//! requested through [`FlowAction`]s and reported back as [`FlowEvent`]s.

use serde::{Deserialize, Serialize};

use super::session::{CustomClothing, FlowStep, Session, Tab};
use crate::clothing::{Category, ClothingItem};
use crate::gallery::Gallery;
use crate::ids::TryOnId;
use crate::photo::{validate_user_photo, ImageHandle, PhotoValidation, ValidationPolicy};
use crate::tryon::{ProcessingStatus, TryOnResult};

/// Events that drive the try-on flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowEvent {
    /// Leave the welcome screen.
    GetStarted,
    /// Navigate one step back.
    Back,
    /// User photo picked or captured.
    SubmitPhoto { photo: ImageHandle },
    /// Custom garment image uploaded.
    UploadClothing { image: ImageHandle },
    /// Detection finished for the upload holding `ticket`.
    CategoryDetected { ticket: u64, category: Category },
    /// Detection failed for the upload holding `ticket`.
    CategoryDetectionFailed { ticket: u64 },
    /// Continue with the uploaded garment once its category is known.
    ConfirmCustomClothing { item_id: String, image_url: String },
    /// Garment picked from the popular catalog.
    SelectCatalogItem { item: ClothingItem },
    /// Progress tick from the pipeline run holding `ticket`.
    ProcessingProgress { ticket: u64, status: ProcessingStatus },
    ProcessingSucceeded { ticket: u64, result: Box<TryOnResult> },
    ProcessingFailed { ticket: u64, reason: String },
    TryAnother,
    SaveToGallery,
    ToggleResultLike,
    DeleteGalleryItem { id: TryOnId },
    ToggleGalleryLike { id: TryOnId },
    SelectTab { tab: Tab },
    /// Gallery restored from storage.
    GalleryRestored { gallery: Gallery },
}

impl FlowEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::GetStarted => "get_started",
            FlowEvent::Back => "back",
            FlowEvent::SubmitPhoto { .. } => "submit_photo",
            FlowEvent::UploadClothing { .. } => "upload_clothing",
            FlowEvent::CategoryDetected { .. } => "category_detected",
            FlowEvent::CategoryDetectionFailed { .. } => "category_detection_failed",
            FlowEvent::ConfirmCustomClothing { .. } => "confirm_custom_clothing",
            FlowEvent::SelectCatalogItem { .. } => "select_catalog_item",
            FlowEvent::ProcessingProgress { .. } => "processing_progress",
            FlowEvent::ProcessingSucceeded { .. } => "processing_succeeded",
            FlowEvent::ProcessingFailed { .. } => "processing_failed",
            FlowEvent::TryAnother => "try_another",
            FlowEvent::SaveToGallery => "save_to_gallery",
            FlowEvent::ToggleResultLike => "toggle_result_like",
            FlowEvent::DeleteGalleryItem { .. } => "delete_gallery_item",
            FlowEvent::ToggleGalleryLike { .. } => "toggle_gallery_like",
            FlowEvent::SelectTab { .. } => "select_tab",
            FlowEvent::GalleryRestored { .. } => "gallery_restored",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowAction {
    /// Guess the category of an uploaded garment.
    DetectCategory { ticket: u64, image: ImageHandle },
    /// Run the mock processing pipeline.
    StartProcessing {
        ticket: u64,
        photo: ImageHandle,
        clothing: ClothingItem,
    },
    /// Write the gallery through the storage boundary.
    PersistGallery,
    /// Drop the object URLs of selections the flow no longer holds.
    ReleaseImages { images: Vec<ImageHandle> },
}

/// Pure flow state machine: no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowStateMachine {
    policy: ValidationPolicy,
}

impl FlowStateMachine {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn validate_photo(&self, photo: &ImageHandle) -> PhotoValidation {
        validate_user_photo(photo, self.policy)
    }

    pub fn transition(&self, mut session: Session, event: FlowEvent) -> (Session, Vec<FlowAction>) {
        let mut actions = Vec::new();
        let on_home = session.tab == Tab::Home;

        match event {
            FlowEvent::GetStarted => {
                if session.step == FlowStep::Welcome {
                    session.tab = Tab::Home;
                    session.step = FlowStep::PhotoUpload { validation: None };
                }
            }
            FlowEvent::Back if on_home => match &session.step {
                FlowStep::PhotoUpload { .. } => session.step = FlowStep::Welcome,
                FlowStep::ClothingUpload { .. } => {
                    session.step = FlowStep::PhotoUpload { validation: None };
                }
                FlowStep::Processing { status, .. } if status.is_error() => {
                    session.step = FlowStep::ClothingUpload { custom: None };
                }
                _ => {}
            },
            FlowEvent::SubmitPhoto { photo } if session.awaits_photo() => {
                let validation = self.validate_photo(&photo);
                if validation.valid {
                    session.photo = Some(photo);
                    session.step = FlowStep::ClothingUpload { custom: None };
                } else {
                    session.step = FlowStep::PhotoUpload {
                        validation: Some(validation),
                    };
                }
            }
            FlowEvent::UploadClothing { image } if on_home => {
                if matches!(session.step, FlowStep::ClothingUpload { .. }) {
                    let ticket = session.take_ticket();
                    session.step = FlowStep::ClothingUpload {
                        custom: Some(CustomClothing {
                            image: image.clone(),
                            category: None,
                            detecting: true,
                            ticket,
                        }),
                    };
                    actions.push(FlowAction::DetectCategory { ticket, image });
                }
            }
            FlowEvent::CategoryDetected { ticket, category } => {
                match pending_detection(&mut session, ticket) {
                    Some(custom) => {
                        custom.category = Some(category);
                        custom.detecting = false;
                    }
                    None => ignore_stale("category_detected", ticket),
                }
            }
            FlowEvent::CategoryDetectionFailed { ticket } => {
                match pending_detection(&mut session, ticket) {
                    Some(custom) => {
                        custom.category = None;
                        custom.detecting = false;
                    }
                    None => ignore_stale("category_detection_failed", ticket),
                }
            }
            FlowEvent::ConfirmCustomClothing { item_id, image_url } if on_home => {
                let category = match &session.step {
                    FlowStep::ClothingUpload {
                        custom: Some(custom),
                    } => custom.category,
                    _ => None,
                };
                if let Some(category) = category {
                    let item = ClothingItem::custom(item_id, category, image_url);
                    start_processing(&mut session, item, &mut actions);
                }
            }
            FlowEvent::SelectCatalogItem { item } if on_home => {
                if matches!(session.step, FlowStep::ClothingUpload { .. }) {
                    start_processing(&mut session, item, &mut actions);
                }
            }
            FlowEvent::ProcessingProgress { ticket, status } => match &mut session.step {
                FlowStep::Processing {
                    ticket: current,
                    status: shown,
                } if *current == ticket && !shown.is_error() => {
                    if status.progress >= shown.progress {
                        *shown = status;
                    }
                }
                _ => ignore_stale("processing_progress", ticket),
            },
            FlowEvent::ProcessingSucceeded { ticket, result } => {
                if is_current_run(&session, ticket) {
                    session.result = Some(*result);
                    session.step = FlowStep::Result;
                } else {
                    ignore_stale("processing_succeeded", ticket);
                }
            }
            FlowEvent::ProcessingFailed { ticket, .. } => {
                if is_current_run(&session, ticket) {
                    session.step = FlowStep::Processing {
                        ticket,
                        status: ProcessingStatus::error(),
                    };
                } else {
                    ignore_stale("processing_failed", ticket);
                }
            }
            FlowEvent::TryAnother if on_home => {
                if session.step == FlowStep::Result {
                    session.step = FlowStep::ClothingUpload { custom: None };
                }
            }
            FlowEvent::SaveToGallery if on_home => {
                if session.step == FlowStep::Result {
                    if let Some(result) = session.result.clone() {
                        if session.gallery.save(result) {
                            actions.push(FlowAction::PersistGallery);
                        }
                    }
                }
            }
            FlowEvent::ToggleResultLike if on_home => {
                if session.step == FlowStep::Result {
                    if let Some(result) = session.result.as_mut() {
                        result.liked = !result.liked;
                        if session.gallery.set_liked(&result.id, result.liked) {
                            actions.push(FlowAction::PersistGallery);
                        }
                    }
                }
            }
            FlowEvent::DeleteGalleryItem { id } => {
                if session.gallery.delete(&id) {
                    actions.push(FlowAction::PersistGallery);
                }
            }
            FlowEvent::ToggleGalleryLike { id } => {
                if let Some(liked) = session.gallery.toggle_like(&id) {
                    if let Some(result) = session.result.as_mut().filter(|r| r.id == id) {
                        result.liked = liked;
                    }
                    actions.push(FlowAction::PersistGallery);
                }
            }
            FlowEvent::SelectTab { tab } => {
                if session.step != FlowStep::Welcome {
                    session.tab = tab;
                    if tab == Tab::Home {
                        // Reselecting home restarts the flow without the previous picks.
                        let mut released: Vec<ImageHandle> =
                            session.photo.take().into_iter().collect();
                        if let FlowStep::ClothingUpload {
                            custom: Some(custom),
                        } = &session.step
                        {
                            released.push(custom.image.clone());
                        }
                        session.clothing = None;
                        session.result = None;
                        session.step = FlowStep::PhotoUpload { validation: None };
                        if !released.is_empty() {
                            actions.push(FlowAction::ReleaseImages { images: released });
                        }
                    }
                }
            }
            FlowEvent::GalleryRestored { gallery } => {
                let mut merged = session.gallery.items().to_vec();
                for item in gallery.items() {
                    if !session.gallery.contains(item.id()) {
                        merged.push(item.clone());
                    }
                }
                session.gallery = Gallery::new(merged);
            }
            _ => {}
        }

        (session, actions)
    }
}

fn pending_detection(session: &mut Session, ticket: u64) -> Option<&mut CustomClothing> {
    match &mut session.step {
        FlowStep::ClothingUpload {
            custom: Some(custom),
        } if custom.ticket == ticket && custom.detecting => Some(custom),
        _ => None,
    }
}

fn is_current_run(session: &Session, ticket: u64) -> bool {
    matches!(
        &session.step,
        FlowStep::Processing { ticket: current, status } if *current == ticket && !status.is_error()
    )
}

fn start_processing(session: &mut Session, item: ClothingItem, actions: &mut Vec<FlowAction>) {
    let Some(photo) = session.photo.clone() else {
        session.step = FlowStep::PhotoUpload { validation: None };
        return;
    };

    let ticket = session.take_ticket();
    session.clothing = Some(item.clone());
    session.result = None;
    session.step = FlowStep::Processing {
        ticket,
        status: ProcessingStatus::starting(),
    };
    actions.push(FlowAction::StartProcessing {
        ticket,
        photo,
        clothing: item,
    });
}

#[allow(unused_variables)]
fn ignore_stale(event: &'static str, ticket: u64) {
    #[cfg(feature = "tracing")]
    tracing::debug!(event, ticket, "ignoring stale flow completion");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clothing::find_catalog_item;
    use crate::flow::Screen;
    use crate::ids::UserId;
    use crate::tryon::ProcessingPhase;
    use chrono::Utc;

    fn machine() -> FlowStateMachine {
        FlowStateMachine::new(ValidationPolicy::Strict)
    }

    fn good_photo() -> ImageHandle {
        ImageHandle::new("me.jpg", "image/jpeg", 2 * 1024 * 1024)
    }

    fn run(session: Session, events: Vec<FlowEvent>) -> (Session, Vec<FlowAction>) {
        let m = machine();
        let mut current = session;
        let mut all = Vec::new();
        for event in events {
            let (next, actions) = m.transition(current, event);
            current = next;
            all.extend(actions);
        }
        (current, all)
    }

    fn at_clothing_upload() -> Session {
        run(
            Session::default(),
            vec![
                FlowEvent::GetStarted,
                FlowEvent::SubmitPhoto {
                    photo: good_photo(),
                },
            ],
        )
        .0
    }

    fn result_for(ticket_item: &ClothingItem) -> TryOnResult {
        TryOnResult {
            id: TryOnId::from("r1"),
            user_id: UserId::placeholder(),
            original_photo_url: "blob:photo".into(),
            clothing_item: ticket_item.clone(),
            result_image_url: "https://example.test/r.jpg".into(),
            transparent_result_url: None,
            created_at: Utc::now(),
            liked: false,
        }
    }

    fn at_result() -> Session {
        let shirt = find_catalog_item("1").unwrap();
        let (session, actions) = run(
            at_clothing_upload(),
            vec![FlowEvent::SelectCatalogItem {
                item: shirt.clone(),
            }],
        );
        let ticket = match &actions[0] {
            FlowAction::StartProcessing { ticket, .. } => *ticket,
            other => panic!("unexpected action {other:?}"),
        };
        run(
            session,
            vec![FlowEvent::ProcessingSucceeded {
                ticket,
                result: Box::new(result_for(&shirt)),
            }],
        )
        .0
    }

    #[test]
    fn flow_state_machine_starts_on_welcome() {
        let session = Session::default();
        assert_eq!(session.step, FlowStep::Welcome);
        assert_eq!(session.screen(), Screen::Welcome);
    }

    #[test]
    fn flow_state_machine_get_started_opens_photo_upload() {
        let (next, actions) = machine().transition(Session::default(), FlowEvent::GetStarted);
        assert_eq!(next.step, FlowStep::PhotoUpload { validation: None });
        assert_eq!(next.screen(), Screen::PhotoUpload);
        assert!(actions.is_empty());
    }

    #[test]
    fn flow_state_machine_valid_photo_advances_to_clothing_upload() {
        let session = at_clothing_upload();
        assert_eq!(session.step.name(), "clothing-upload");
        assert_eq!(session.photo, Some(good_photo()));
    }

    #[test]
    fn flow_state_machine_invalid_photo_stays_with_validation_message() {
        let (session, _) = run(
            Session::default(),
            vec![
                FlowEvent::GetStarted,
                FlowEvent::SubmitPhoto {
                    photo: ImageHandle::new("me.gif", "image/gif", 300_000),
                },
            ],
        );
        match session.step {
            FlowStep::PhotoUpload {
                validation: Some(validation),
            } => {
                assert!(!validation.valid);
                assert!(!validation.message.is_empty());
            }
            other => panic!("unexpected step {other:?}"),
        }
        assert!(session.photo.is_none());
    }

    #[test]
    fn flow_state_machine_back_navigation() {
        let (session, _) = machine().transition(at_clothing_upload(), FlowEvent::Back);
        assert_eq!(session.step, FlowStep::PhotoUpload { validation: None });

        let (session, _) = machine().transition(session, FlowEvent::Back);
        assert_eq!(session.step, FlowStep::Welcome);
    }

    #[test]
    fn flow_state_machine_catalog_pick_starts_processing() {
        let shirt = find_catalog_item("1").unwrap();
        let (session, actions) = machine().transition(
            at_clothing_upload(),
            FlowEvent::SelectCatalogItem {
                item: shirt.clone(),
            },
        );

        let status = session.processing_status().expect("processing");
        assert_eq!(status.progress, 0);
        assert_eq!(status.status, ProcessingPhase::Processing);
        assert_eq!(session.clothing, Some(shirt.clone()));
        assert_eq!(
            actions,
            vec![FlowAction::StartProcessing {
                ticket: 1,
                photo: good_photo(),
                clothing: shirt,
            }]
        );
    }

    #[test]
    fn flow_state_machine_processing_is_entered_only_once() {
        let shirt = find_catalog_item("1").unwrap();
        let (session, actions) = run(
            at_clothing_upload(),
            vec![
                FlowEvent::SelectCatalogItem { item: shirt.clone() },
                FlowEvent::SelectCatalogItem { item: shirt },
            ],
        );
        assert_eq!(actions.len(), 1);
        assert_eq!(session.step.name(), "processing");
    }

    #[test]
    fn flow_state_machine_progress_is_monotonic_and_ticket_scoped() {
        let shirt = find_catalog_item("1").unwrap();
        let (session, _) = run(
            at_clothing_upload(),
            vec![
                FlowEvent::SelectCatalogItem { item: shirt },
                FlowEvent::ProcessingProgress {
                    ticket: 1,
                    status: ProcessingStatus::processing(50, "half"),
                },
                FlowEvent::ProcessingProgress {
                    ticket: 1,
                    status: ProcessingStatus::processing(30, "older"),
                },
                FlowEvent::ProcessingProgress {
                    ticket: 99,
                    status: ProcessingStatus::processing(90, "stale"),
                },
            ],
        );
        let status = session.processing_status().unwrap();
        assert_eq!(status.progress, 50);
        assert_eq!(status.message, "half");
    }

    #[test]
    fn flow_state_machine_success_shows_result() {
        let session = at_result();
        assert_eq!(session.step, FlowStep::Result);
        let result = session.result.expect("result");
        assert_eq!(result.clothing_item.category, Category::Shirt);
    }

    #[test]
    fn flow_state_machine_failure_sets_error_and_back_returns_to_clothing() {
        let shirt = find_catalog_item("1").unwrap();
        let (session, _) = run(
            at_clothing_upload(),
            vec![
                FlowEvent::SelectCatalogItem { item: shirt },
                FlowEvent::ProcessingFailed {
                    ticket: 1,
                    reason: "boom".into(),
                },
            ],
        );
        let status = session.processing_status().unwrap();
        assert!(status.is_error());
        assert_eq!(status.message, ProcessingStatus::ERROR_MESSAGE);
        assert!(session.result.is_none());

        let (session, _) = machine().transition(session, FlowEvent::Back);
        assert_eq!(session.step, FlowStep::ClothingUpload { custom: None });
    }

    #[test]
    fn flow_state_machine_try_another_returns_to_clothing_upload() {
        let (session, _) = machine().transition(at_result(), FlowEvent::TryAnother);
        assert_eq!(session.step, FlowStep::ClothingUpload { custom: None });
        assert!(session.photo.is_some());
    }

    #[test]
    fn flow_state_machine_save_and_delete_gallery_item() {
        let (session, actions) = machine().transition(at_result(), FlowEvent::SaveToGallery);
        assert_eq!(actions, vec![FlowAction::PersistGallery]);
        assert_eq!(session.gallery.len(), 1);
        let saved = &session.gallery.items()[0];
        assert_eq!(saved.id(), &session.result.as_ref().unwrap().id);

        let (session, actions) = machine().transition(session, FlowEvent::SaveToGallery);
        assert!(actions.is_empty());
        assert_eq!(session.gallery.len(), 1);

        let (session, actions) = machine().transition(
            session,
            FlowEvent::DeleteGalleryItem {
                id: TryOnId::from("missing"),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(session.gallery.len(), 1);

        let (session, actions) = machine().transition(
            session,
            FlowEvent::DeleteGalleryItem {
                id: TryOnId::from("r1"),
            },
        );
        assert_eq!(actions, vec![FlowAction::PersistGallery]);
        assert!(session.gallery.is_empty());
    }

    #[test]
    fn flow_state_machine_likes_stay_in_sync_between_result_and_gallery() {
        let (session, _) = run(
            at_result(),
            vec![FlowEvent::SaveToGallery, FlowEvent::ToggleResultLike],
        );
        assert!(session.result.as_ref().unwrap().liked);
        assert!(session.gallery.items()[0].liked());

        let (session, _) = machine().transition(
            session,
            FlowEvent::ToggleGalleryLike {
                id: TryOnId::from("r1"),
            },
        );
        assert!(!session.result.as_ref().unwrap().liked);
        assert!(!session.gallery.items()[0].liked());
    }

    #[test]
    fn flow_state_machine_custom_upload_requires_detected_category() {
        let image = ImageHandle::new("IMG_1.jpg", "image/jpeg", 120_000);
        let (session, actions) = machine().transition(
            at_clothing_upload(),
            FlowEvent::UploadClothing {
                image: image.clone(),
            },
        );
        assert_eq!(
            actions,
            vec![FlowAction::DetectCategory {
                ticket: 1,
                image: image.clone()
            }]
        );

        // Confirming before detection finishes does nothing.
        let (session, actions) = machine().transition(
            session,
            FlowEvent::ConfirmCustomClothing {
                item_id: "42".into(),
                image_url: "blob:cloth".into(),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(session.step.name(), "clothing-upload");

        let (session, _) = machine().transition(
            session,
            FlowEvent::CategoryDetected {
                ticket: 1,
                category: Category::Jacket,
            },
        );
        let (session, actions) = machine().transition(
            session,
            FlowEvent::ConfirmCustomClothing {
                item_id: "42".into(),
                image_url: "blob:cloth".into(),
            },
        );
        assert_eq!(session.step.name(), "processing");
        let clothing = session.clothing.expect("clothing");
        assert_eq!(clothing.category, Category::Jacket);
        assert_eq!(clothing.name, "Jaqueta Personalizada");
        assert_eq!(clothing.image_url, "blob:cloth");
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn flow_state_machine_detection_failure_leaves_category_unset() {
        let image = ImageHandle::new("IMG_1.jpg", "image/jpeg", 120_000);
        let (session, _) = run(
            at_clothing_upload(),
            vec![
                FlowEvent::UploadClothing { image },
                FlowEvent::CategoryDetectionFailed { ticket: 1 },
                FlowEvent::ConfirmCustomClothing {
                    item_id: "42".into(),
                    image_url: "blob:cloth".into(),
                },
            ],
        );
        match session.step {
            FlowStep::ClothingUpload {
                custom: Some(custom),
            } => {
                assert_eq!(custom.category, None);
                assert!(!custom.detecting);
            }
            other => panic!("unexpected step {other:?}"),
        }
    }

    #[test]
    fn flow_state_machine_home_tab_resets_flow_and_discards_stale_run() {
        let shirt = find_catalog_item("1").unwrap();
        let (session, _) = run(
            at_clothing_upload(),
            vec![
                FlowEvent::SelectCatalogItem { item: shirt.clone() },
                FlowEvent::SelectTab { tab: Tab::Home },
            ],
        );
        assert_eq!(session.step, FlowStep::PhotoUpload { validation: None });
        assert!(session.photo.is_none());
        assert!(session.clothing.is_none());

        let (session, _) = machine().transition(
            session,
            FlowEvent::ProcessingSucceeded {
                ticket: 1,
                result: Box::new(result_for(&shirt)),
            },
        );
        assert_eq!(session.step.name(), "photo-upload");
        assert!(session.result.is_none());
    }

    #[test]
    fn flow_state_machine_home_tab_releases_photo_and_uploaded_garment() {
        let upload = ImageHandle::new("jaqueta.png", "image/png", 40_000);
        let (session, _) = run(
            at_clothing_upload(),
            vec![FlowEvent::UploadClothing {
                image: upload.clone(),
            }],
        );

        let (session, actions) =
            machine().transition(session, FlowEvent::SelectTab { tab: Tab::Home });
        assert_eq!(
            actions,
            vec![FlowAction::ReleaseImages {
                images: vec![good_photo(), upload],
            }]
        );

        // Nothing left to release on a second reset.
        let (_, actions) = machine().transition(session, FlowEvent::SelectTab { tab: Tab::Home });
        assert!(actions.is_empty());
    }

    #[test]
    fn flow_state_machine_photo_is_ignored_outside_photo_upload() {
        let (session, _) = machine().transition(
            Session::default(),
            FlowEvent::SubmitPhoto {
                photo: good_photo(),
            },
        );
        assert_eq!(session.step, FlowStep::Welcome);
        assert!(session.photo.is_none());

        let (session, _) = run(
            Session::default(),
            vec![
                FlowEvent::GetStarted,
                FlowEvent::SelectTab { tab: Tab::Explore },
            ],
        );
        assert!(!session.awaits_photo());
        let (session, _) = machine().transition(
            session,
            FlowEvent::SubmitPhoto {
                photo: good_photo(),
            },
        );
        assert!(session.photo.is_none());
    }

    #[test]
    fn flow_state_machine_other_tabs_keep_the_flow_step() {
        let (session, _) = machine().transition(
            at_clothing_upload(),
            FlowEvent::SelectTab { tab: Tab::Gallery },
        );
        assert_eq!(session.screen(), Screen::Gallery);
        assert_eq!(session.step.name(), "clothing-upload");

        // Flow input is ignored while another tab is shown.
        let (session, actions) = machine().transition(
            session,
            FlowEvent::SelectCatalogItem {
                item: find_catalog_item("2").unwrap(),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(session.step.name(), "clothing-upload");
    }

    #[test]
    fn flow_state_machine_tabs_are_hidden_on_welcome() {
        let (session, _) =
            machine().transition(Session::default(), FlowEvent::SelectTab { tab: Tab::Profile });
        assert_eq!(session.tab, Tab::Home);
        assert_eq!(session.screen(), Screen::Welcome);
    }

    #[test]
    fn flow_state_machine_gallery_restore_keeps_session_items_first() {
        let (session, _) = machine().transition(at_result(), FlowEvent::SaveToGallery);
        let mut stored = Gallery::default();
        stored.save(TryOnResult {
            id: TryOnId::from("older"),
            ..session.result.clone().unwrap()
        });
        stored.save(session.result.clone().unwrap());

        let (session, actions) =
            machine().transition(session, FlowEvent::GalleryRestored { gallery: stored });
        assert!(actions.is_empty());
        let ids: Vec<_> = session.gallery.items().iter().map(|i| i.id().as_str()).collect();
        assert_eq!(ids, vec!["r1", "older"]);
    }
}
