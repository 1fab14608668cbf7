//! Page controller behavior: navigation, active links, and both forms.

use sitewire::config::Config;
use sitewire::events::PageEvent;
use sitewire::forms::SubmitOutcome;
use sitewire::scenario::advance;
use sitewire::validation::SubmissionError;
use std::time::Duration;
use tokio::task::LocalSet;

mod fixtures;
use fixtures::*;

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_active_link_matches_current_page() {
    let (document, controller) = controller_for(FULL_PAGE, "/about.html");

    let about = by_id(&document, "link-about");
    assert_eq!(controller.active_links(), [about]);

    let doc = document.borrow();
    for id in ["link-home", "link-contact"] {
        let link = doc.get_element_by_id(id).unwrap();
        assert!(!doc.has_class(link, "active"), "{id} should not be active");
    }
    assert!(doc.has_class(about, "active"));
}

#[test]
fn test_root_path_marks_default_page() {
    let (document, controller) = controller_for(FULL_PAGE, "/");
    assert_eq!(controller.active_links(), [by_id(&document, "link-home")]);
}

#[test]
fn test_configured_default_page() {
    let mut config = Config::default();
    config.behavior.default_page = "contact.html".to_string();

    let (document, controller) = controller_with_config(FULL_PAGE, "/site/", &config);
    assert_eq!(controller.active_links(), [by_id(&document, "link-contact")]);
}

#[test]
fn test_active_links_marked_without_toggle() {
    let html = r#"<ul><li><a id="a" class="nav-link active" href="index.html"></a></li>
        <li><a id="b" class="nav-link" href="about.html"></a></li></ul>"#;
    let (document, controller) = controller_for(html, "/about.html");

    assert!(controller.navigation().is_none());
    let doc = document.borrow();
    assert!(!doc.has_class(doc.get_element_by_id("a").unwrap(), "active"));
    assert!(doc.has_class(doc.get_element_by_id("b").unwrap(), "active"));
}

#[test]
fn test_double_toggle_is_identity() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/index.html");
    let bar = by_id(&document, "toggle-bar");
    let before = controller.navigation().unwrap().is_open();

    controller.dispatch(PageEvent::Click { target: bar });
    assert_ne!(controller.navigation().unwrap().is_open(), before);

    controller.dispatch(PageEvent::Click { target: bar });
    assert_eq!(controller.navigation().unwrap().is_open(), before);
}

#[test]
fn test_link_outside_click_and_scroll_close_menu() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/index.html");
    let toggle = controller.navigation().unwrap().toggle();
    let is_open = |c: &sitewire::controller::PageController| c.navigation().unwrap().is_open();

    controller.dispatch(PageEvent::Click { target: toggle });
    controller.dispatch(PageEvent::Click {
        target: by_id(&document, "link-contact"),
    });
    assert!(!is_open(&controller));

    controller.dispatch(PageEvent::Click { target: toggle });
    controller.dispatch(PageEvent::Click {
        target: by_id(&document, "title"),
    });
    assert!(!is_open(&controller));

    controller.dispatch(PageEvent::Click { target: toggle });
    controller.dispatch(PageEvent::Scroll { scroll_top: 0.5 });
    assert!(!is_open(&controller));
}

#[test]
fn test_bare_page_attaches_nothing() {
    let (document, mut controller) = controller_for(BARE_PAGE, "/index.html");
    assert!(controller.navigation().is_none());
    assert!(controller.contact().is_none());
    assert!(controller.newsletter().is_none());
    assert!(controller.active_links().is_empty());

    let text = by_id(&document, "text");
    let outcome = controller.dispatch(PageEvent::Click { target: text });
    assert!(!outcome.default_prevented);
    let outcome = controller.dispatch(PageEvent::Scroll { scroll_top: 10.0 });
    assert!(outcome.submission.is_none());
}

#[test]
fn test_submit_on_unknown_form_is_not_intercepted() {
    let html = r#"<form id="search"><input id="q"></form>"#;
    let (document, mut controller) = controller_for(html, "/");
    let form = by_id(&document, "search");

    let outcome = controller.dispatch(PageEvent::Submit { form });
    assert!(!outcome.default_prevented);
    assert!(outcome.submission.is_none());
}

// ============================================================================
// Contact form
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_contact_missing_name_shows_required_error() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/contact.html");
    let form = by_id(&document, "contactForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "email", "x@y.com");
            fill(&document, "message", "hi");

            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert!(outcome.default_prevented);
            assert_eq!(
                outcome.submission.unwrap().error(),
                Some(SubmissionError::MissingRequired)
            );

            let (text, class, visible) = message_state(&document, "formMessage");
            assert_eq!(text, "Please fill in all required fields.");
            assert_eq!(class, "form-message error");
            assert!(visible);

            // No reset was scheduled: the fields survive the delay.
            tokio::time::sleep(Duration::from_secs(10)).await;
            assert_eq!(document.borrow().value(by_id(&document, "email")), "x@y.com");
            assert!(document.borrow().console().is_empty());
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_contact_whitespace_only_fields_are_empty() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/contact.html");
    let form = by_id(&document, "contactForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "name", "   ");
            fill(&document, "email", "jo@x.com");
            fill(&document, "message", "hi");

            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert_eq!(
                outcome.submission.unwrap().error(),
                Some(SubmissionError::MissingRequired)
            );
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_contact_malformed_email() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/contact.html");
    let form = by_id(&document, "contactForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "name", "Jo");
            fill(&document, "email", "not-an-email");
            fill(&document, "message", "hi");

            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert_eq!(
                outcome.submission.unwrap().error(),
                Some(SubmissionError::MalformedEmail)
            );

            let (text, class, _) = message_state(&document, "formMessage");
            assert_eq!(text, "Please enter a valid email address.");
            assert_eq!(class, "form-message error");
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_contact_success_then_reset_after_delay() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/contact.html");
    let form = by_id(&document, "contactForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "name", "Jo");
            fill(&document, "email", " jo@x.com ");
            fill(&document, "message", "hi");
            check(&document, "newsletter", true);

            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert!(outcome.default_prevented);
            let Some(SubmitOutcome::Accepted(reset)) = outcome.submission else {
                panic!("submission should be accepted");
            };

            let (text, class, visible) = message_state(&document, "formMessage");
            assert_eq!(
                text,
                "Thank you for contacting us! We'll get back to you soon."
            );
            assert_eq!(class, "form-message success");
            assert!(visible);

            let console = document.borrow().console().to_vec();
            assert_eq!(console.len(), 1);
            assert!(console[0].starts_with("Form submitted: "));
            let record: serde_json::Value =
                serde_json::from_str(console[0].trim_start_matches("Form submitted: ")).unwrap();
            assert_eq!(record["name"], "Jo");
            assert_eq!(record["email"], "jo@x.com");
            assert_eq!(record["phone"], "");
            assert_eq!(record["message"], "hi");
            assert_eq!(record["newsletter"], true);

            tokio::time::sleep(Duration::from_millis(4900)).await;
            assert_eq!(document.borrow().value(by_id(&document, "name")), "Jo");

            reset.await.unwrap();
            let doc = document.borrow();
            for id in ["name", "email", "phone", "message"] {
                assert_eq!(doc.value(doc.get_element_by_id(id).unwrap()), "", "#{id}");
            }
            assert!(!doc.checked(doc.get_element_by_id("newsletter").unwrap()));
            drop(doc);

            let (text, class, visible) = message_state(&document, "formMessage");
            assert_eq!(text, "");
            assert_eq!(class, "form-message");
            assert!(!visible);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_rapid_resubmission_is_not_cancelled() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/contact.html");
    let form = by_id(&document, "contactForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "name", "Jo");
            fill(&document, "email", "jo@x.com");
            fill(&document, "message", "first");
            controller.dispatch(PageEvent::Submit { form });

            tokio::time::sleep(Duration::from_secs(3)).await;
            fill(&document, "name", "Jo");
            fill(&document, "email", "jo@x.com");
            fill(&document, "message", "second");
            controller.dispatch(PageEvent::Submit { form });
            assert_eq!(document.borrow().console().len(), 2);

            // The first timer still fires at t=5s and wipes the second entry.
            tokio::time::sleep(Duration::from_millis(2100)).await;
            assert_eq!(document.borrow().value(by_id(&document, "message")), "");
            let (_, _, visible) = message_state(&document, "formMessage");
            assert!(!visible);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_configured_delay_and_texts() {
    let mut config = Config::default();
    config.behavior.reset_delay_ms = 200;
    config.messages.contact_success = "Sent.".to_string();
    let (document, mut controller) = controller_with_config(FULL_PAGE, "/", &config);
    let form = by_id(&document, "contactForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "name", "Jo");
            fill(&document, "email", "jo@x.com");
            fill(&document, "message", "hi");
            controller.dispatch(PageEvent::Submit { form });
            assert_eq!(message_state(&document, "formMessage").0, "Sent.");

            advance(Duration::from_millis(199)).await;
            assert_eq!(message_state(&document, "formMessage").0, "Sent.");
            assert_eq!(document.borrow().value(by_id(&document, "name")), "Jo");

            advance(Duration::from_millis(1)).await;
            assert_eq!(message_state(&document, "formMessage").0, "");
            assert_eq!(document.borrow().value(by_id(&document, "name")), "");
        })
        .await;
}

#[test]
fn test_contact_disabled_without_message_element() {
    let html = FULL_PAGE.replace(r#"<div id="formMessage" class="form-message"></div>"#, "");
    let (_, controller) = controller_for(&html, "/");
    assert!(controller.contact().is_none());
    assert!(controller.newsletter().is_some());
}

// ============================================================================
// Newsletter form
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_newsletter_validation_sequence() {
    let (document, mut controller) = controller_for(FULL_PAGE, "/");
    let form = by_id(&document, "newsletterForm");

    LocalSet::new()
        .run_until(async {
            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert_eq!(
                outcome.submission.unwrap().error(),
                Some(SubmissionError::MissingRequired)
            );
            let (text, class, _) = message_state(&document, "newsletterMessage");
            assert_eq!(text, "Please enter your email address.");
            assert_eq!(class, "newsletter-message error");

            fill(&document, "newsletter-email", "a@b");
            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert_eq!(
                outcome.submission.unwrap().error(),
                Some(SubmissionError::MalformedEmail)
            );
            assert_eq!(
                message_state(&document, "newsletterMessage").0,
                "Please enter a valid email address."
            );

            fill(&document, "newsletter-email", "a@b.com");
            let outcome = controller.dispatch(PageEvent::Submit { form });
            assert!(outcome.submission.unwrap().is_accepted());
            let (text, class, _) = message_state(&document, "newsletterMessage");
            assert_eq!(
                text,
                "Thank you! You've been successfully subscribed to our mailing list."
            );
            assert_eq!(class, "newsletter-message success");
            assert_eq!(
                document.borrow().console(),
                [r#"Newsletter subscription: {"email":"a@b.com"}"#]
            );

            advance(Duration::from_millis(4999)).await;
            assert_eq!(
                document.borrow().value(by_id(&document, "newsletter-email")),
                "a@b.com"
            );
            assert!(message_state(&document, "newsletterMessage").2);

            advance(Duration::from_millis(1)).await;
            assert_eq!(
                document.borrow().value(by_id(&document, "newsletter-email")),
                ""
            );
            let (text, class, visible) = message_state(&document, "newsletterMessage");
            assert_eq!(text, "");
            assert_eq!(class, "newsletter-message");
            assert!(!visible);
        })
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_newsletter_without_message_element_still_resets() {
    let html = r#"<form id="newsletterForm"><input id="newsletter-email"></form>"#;
    let (document, mut controller) = controller_for(html, "/");
    let form = by_id(&document, "newsletterForm");

    LocalSet::new()
        .run_until(async {
            fill(&document, "newsletter-email", "a@b.com");
            let outcome = controller.dispatch(PageEvent::Submit { form });
            let Some(SubmitOutcome::Accepted(reset)) = outcome.submission else {
                panic!("submission should be accepted");
            };
            reset.await.unwrap();
            assert_eq!(
                document.borrow().value(by_id(&document, "newsletter-email")),
                ""
            );
        })
        .await;
}
