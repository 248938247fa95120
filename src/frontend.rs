use serde_json::json;
use std::{cell::Cell, rc::Rc};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Document, DocumentReadyState, Element, HtmlElement, MouseEvent, Window};
use yew::prelude::*;

use crate::{
    config::{InteractionConfig, CONFIG_ELEMENT_ID},
    contact::outcome_notification,
    dom::{
        href, measure_sections, query_all_within, read_submission, scroll_offset, set_class,
        set_style, smooth_scroll_to, style_value, Listener, Observer, PageElements, SetupError,
    },
    loader::{LoaderSequence, LoaderStage, LOADER_SPINNER_CSS},
    logging::{LogLevel, Logger},
    navbar::{NavbarState, SCROLLED_CLASS},
    navigation::{
        active_flags, anchor_target, click_flags, scroll_destination, MenuState, ACTIVE_CLASS,
    },
    notification::{
        Notification, NotificationAction, NotificationKind, NotificationLifecycle,
        NotificationQueue,
    },
    reveal::{stagger_delay, CardStyle, RevealOnce, RevealPolicy, CARD_TRANSITION, COLLAPSED_WIDTH},
    scroll::{scroll_top_style, ScrollController, SCROLL_TOP_LABEL},
    timeline::{drive, Delayed, TimerClock},
    typewriter::Typewriter,
};

const LAYER_ROOT_ID: &str = "interaction-layer";

impl Reducible for NotificationQueue {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Clone)]
struct Notifier {
    dispatcher: UseReducerDispatcher<NotificationQueue>,
    next_id: Rc<Cell<u32>>,
    display_ms: u32,
}

impl Notifier {
    fn show(&self, kind: NotificationKind, message: String) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.dispatcher
            .dispatch(NotificationAction::Push(Notification { id, kind, message }));

        let dispatcher = self.dispatcher.clone();
        let lifecycle = NotificationLifecycle::new(self.display_ms);
        spawn_local(async move {
            let clock = TimerClock;
            drive(lifecycle, &clock, |stage| {
                dispatcher.dispatch(NotificationAction::Advance { id, stage });
            })
            .await;
        });
    }
}

#[derive(Default)]
struct Wiring {
    _listeners: Vec<Listener>,
    _observers: Vec<Observer>,
}

#[derive(Properties, PartialEq)]
struct InteractionLayerProps {
    config: InteractionConfig,
    page: PageElements,
}

#[function_component(InteractionLayer)]
fn interaction_layer(props: &InteractionLayerProps) -> Html {
    let scroll_top_visible = use_state_eq(|| false);
    let loader_stage = use_state_eq(|| LoaderStage::Visible);
    let notifications = use_reducer(NotificationQueue::default);

    {
        let config = props.config.clone();
        let page = props.page.clone();
        let scroll_top_visible = scroll_top_visible.clone();
        let loader_stage = loader_stage.clone();
        let dispatcher = notifications.dispatcher();
        use_effect_with((), move |_| {
            let notifier = Notifier {
                dispatcher,
                next_id: Rc::new(Cell::new(0)),
                display_ms: config.notification_duration_ms,
            };
            let wiring = wire(&config, &page, scroll_top_visible, loader_stage, notifier);
            move || drop(wiring)
        });
    }

    let on_scroll_top = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <>
            <button
                class="scroll-top"
                type="button"
                aria-label="Scroll to top"
                style={scroll_top_style(*scroll_top_visible)}
                onclick={on_scroll_top}
            >
                {SCROLL_TOP_LABEL}
            </button>
            { for notifications.entries().iter().map(|(notification, stage)| html! {
                <div
                    key={notification.id}
                    class={classes!("notification", notification.kind.modifier_class())}
                    style={notification.style(*stage)}
                >
                    {notification.message.clone()}
                </div>
            }) }
            if *loader_stage != LoaderStage::Removed {
                <>
                    <div class="loader" style={loader_stage.overlay_style()}>
                        <div class="loader-spinner"></div>
                    </div>
                    <style>{LOADER_SPINNER_CSS}</style>
                </>
            }
        </>
    }
}

fn wire(
    config: &InteractionConfig,
    page: &PageElements,
    scroll_top_visible: UseStateHandle<bool>,
    loader_stage: UseStateHandle<LoaderStage>,
    notifier: Notifier,
) -> Wiring {
    let logger = Logger::new(config.log_level);
    let Some(window) = window() else {
        return Wiring::default();
    };
    let Some(document) = window.document() else {
        return Wiring::default();
    };

    let mut listeners = vec![wire_scroll(&window, config, page, scroll_top_visible)];
    listeners.extend(wire_menu(page));
    listeners.extend(wire_anchors(&document, config, page));
    listeners.extend(wire_contact_form(page, notifier, logger));
    listeners.extend(wire_loader(&window, &document, config, loader_stage));

    let policy = RevealPolicy::new(config);
    let observers: Vec<Observer> = [
        wire_skills(&policy, config, page, logger),
        wire_cards(&policy, config, page, logger),
    ]
    .into_iter()
    .filter_map(|observer| match observer {
        Ok(observer) => observer,
        Err(error) => {
            logger.log(
                LogLevel::Warn,
                "reveal_observer_failed",
                json!({ "error": error.to_string() }),
            );
            None
        }
    })
    .collect();

    start_typewriter(config, page);

    logger.log(
        LogLevel::Info,
        "interactions_ready",
        json!({
            "sections": page.sections.len(),
            "anchors": page.anchors.len(),
            "projectCards": page.project_cards.len(),
            "skills": page.skills.is_some(),
            "contactForm": page.contact_form.is_some(),
            "heroTitle": page.hero_title.is_some(),
        }),
    );

    Wiring {
        _listeners: listeners,
        _observers: observers,
    }
}

fn apply_navbar(navbar: &HtmlElement, state: NavbarState) {
    set_class(navbar, SCROLLED_CLASS, state.scrolled);
    set_style(navbar, "background", state.background());
    set_style(navbar, "backdrop-filter", state.backdrop_filter());
    set_style(navbar, "box-shadow", state.box_shadow());
    set_style(navbar, "transform", state.transform());
}

fn apply_active_flags(links: &[HtmlElement], flags: &[bool]) {
    for (link, active) in links.iter().zip(flags) {
        set_class(link, ACTIVE_CLASS, *active);
    }
}

fn wire_scroll(
    window: &Window,
    config: &InteractionConfig,
    page: &PageElements,
    scroll_top_visible: UseStateHandle<bool>,
) -> Listener {
    let mut controller = ScrollController::new(config);
    let navbar = page.navbar.clone();
    let anchors = page.anchors.clone();
    let hrefs: Vec<String> = anchors.iter().map(|anchor| href(anchor)).collect();
    let sections = page.sections.clone();
    let scroll_window = window.clone();

    Listener::new(window, "scroll", move |_| {
        let offset = scroll_offset(&scroll_window);
        let frame = controller.on_scroll(offset, &measure_sections(&sections));

        apply_navbar(&navbar, frame.navbar);
        apply_active_flags(&anchors, &active_flags(&hrefs, frame.active_section.as_deref()));
        scroll_top_visible.set(frame.scroll_top_visible);
    })
}

fn wire_menu(page: &PageElements) -> Vec<Listener> {
    let menu = Rc::new(Cell::new(MenuState::default()));
    let mut listeners = Vec::with_capacity(page.nav_links.len() + 1);

    {
        let menu = menu.clone();
        let hamburger = page.hamburger.clone();
        let nav_menu = page.nav_menu.clone();
        listeners.push(Listener::new(&page.hamburger, "click", move |_| {
            let mut state = menu.get();
            let open = state.toggle();
            menu.set(state);
            set_class(&hamburger, ACTIVE_CLASS, open);
            set_class(&nav_menu, ACTIVE_CLASS, open);
        }));
    }

    for link in &page.nav_links {
        let menu = menu.clone();
        let hamburger = page.hamburger.clone();
        let nav_menu = page.nav_menu.clone();
        listeners.push(Listener::new(link, "click", move |_| {
            let mut state = menu.get();
            state.close();
            menu.set(state);
            set_class(&hamburger, ACTIVE_CLASS, false);
            set_class(&nav_menu, ACTIVE_CLASS, false);
        }));
    }

    listeners
}

fn wire_anchors(
    document: &Document,
    config: &InteractionConfig,
    page: &PageElements,
) -> Vec<Listener> {
    let header_offset = config.header_offset_px;

    page.anchors
        .iter()
        .enumerate()
        .map(|(index, anchor)| {
            let document = document.clone();
            let anchors = page.anchors.clone();
            let target_id = anchor_target(&href(anchor)).map(ToString::to_string);

            Listener::new(anchor, "click", move |event| {
                event.prevent_default();

                let target = target_id
                    .as_deref()
                    .and_then(|id| document.get_element_by_id(id))
                    .and_then(|element| element.dyn_into::<HtmlElement>().ok());

                if let Some(target) = &target {
                    smooth_scroll_to(scroll_destination(
                        f64::from(target.offset_top()),
                        header_offset,
                    ));
                }

                apply_active_flags(
                    &anchors,
                    &click_flags(anchors.len(), index, target.is_some()),
                );
            })
        })
        .collect()
}

fn wire_skills(
    policy: &RevealPolicy,
    config: &InteractionConfig,
    page: &PageElements,
    logger: Logger,
) -> Result<Option<Observer>, SetupError> {
    let Some(skills) = page.skills.clone() else {
        return Ok(None);
    };
    let fill_delay_ms = config.skill_fill_delay_ms;

    let observer = Observer::new(policy, move |target, observer| {
        let bars = query_all_within(target, ".skill-progress");
        logger.log(
            LogLevel::Debug,
            "skills_revealed",
            json!({ "bars": bars.len() }),
        );

        for bar in bars {
            let width = style_value(&bar, "width");
            set_style(&bar, "width", COLLAPSED_WIDTH);
            spawn_local(async move {
                let clock = TimerClock;
                drive(Delayed::new(fill_delay_ms, width), &clock, |width| {
                    set_style(&bar, "width", &width);
                })
                .await;
            });
        }

        observer.unobserve(target);
    })?;
    observer.observe(&skills);

    Ok(Some(observer))
}

fn wire_cards(
    policy: &RevealPolicy,
    config: &InteractionConfig,
    page: &PageElements,
    logger: Logger,
) -> Result<Option<Observer>, SetupError> {
    if page.project_cards.is_empty() {
        return Ok(None);
    }

    for (index, card) in page.project_cards.iter().enumerate() {
        let hidden = CardStyle::hidden();
        set_style(card, "opacity", hidden.opacity);
        set_style(card, "transform", hidden.transform);
        set_style(card, "transition", CARD_TRANSITION);
        set_style(
            card,
            "transition-delay",
            &stagger_delay(index, config.card_stagger_ms),
        );
    }

    let cards = page.project_cards.clone();
    let mut revealed = RevealOnce::new(cards.len());
    let observer = Observer::new(policy, move |target, observer| {
        let position = cards.iter().position(|card| {
            let element: &Element = card;
            element == target
        });

        if let Some(index) = position.filter(|index| revealed.enter(*index)) {
            let shown = CardStyle::revealed();
            set_style(&cards[index], "opacity", shown.opacity);
            set_style(&cards[index], "transform", shown.transform);
            logger.log(
                LogLevel::Debug,
                "project_card_revealed",
                json!({ "index": index }),
            );
        }

        observer.unobserve(target);
    })?;

    for card in &page.project_cards {
        observer.observe(card);
    }

    Ok(Some(observer))
}

fn wire_contact_form(page: &PageElements, notifier: Notifier, logger: Logger) -> Option<Listener> {
    let form = page.contact_form.clone()?;
    let submitted_form = form.clone();

    Some(Listener::new(&form, "submit", move |event| {
        event.prevent_default();

        let submission = read_submission(&submitted_form);
        let result = submission.validate();
        let (kind, message) = outcome_notification(&result);
        notifier.show(kind, message);

        match result {
            Ok(()) => {
                submitted_form.reset();
                logger.log(
                    LogLevel::Info,
                    "contact_form_submitted",
                    json!({
                        "name": submission.name,
                        "email": submission.email,
                        "messageChars": submission.message.chars().count(),
                    }),
                );
            }
            Err(error) => logger.log(
                LogLevel::Info,
                "contact_form_rejected",
                json!({ "reason": error.kind() }),
            ),
        }
    }))
}

fn wire_loader(
    window: &Window,
    document: &Document,
    config: &InteractionConfig,
    loader_stage: UseStateHandle<LoaderStage>,
) -> Option<Listener> {
    let sequence = LoaderSequence::new(config.loader_hold_ms, config.loader_fade_ms);
    let start = move || {
        spawn_local(async move {
            let clock = TimerClock;
            drive(sequence, &clock, |stage| loader_stage.set(stage)).await;
        });
    };

    if document.ready_state() == DocumentReadyState::Complete {
        start();
        return None;
    }

    let mut start = Some(start);
    Some(Listener::new(window, "load", move |_| {
        if let Some(start) = start.take() {
            start();
        }
    }))
}

fn start_typewriter(config: &InteractionConfig, page: &PageElements) {
    let Some(title) = page.hero_title.clone() else {
        return;
    };

    let text = title.text_content().unwrap_or_default();
    title.set_text_content(Some(""));
    let typewriter = Typewriter::new(
        &text,
        config.typewriter_start_delay_ms,
        config.typewriter_char_delay_ms,
    );

    spawn_local(async move {
        let clock = TimerClock;
        drive(typewriter, &clock, |frame| title.set_text_content(Some(frame.as_str()))).await;
    });
}

fn read_config(document: &Document) -> InteractionConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return InteractionConfig::default();
    };

    InteractionConfig::parse(&raw).unwrap_or_else(|error| {
        let fallback = InteractionConfig::default();
        Logger::new(fallback.log_level).log(
            LogLevel::Warn,
            "config_invalid",
            json!({ "error": error.to_string() }),
        );
        fallback
    })
}

fn mount(document: &Document, config: InteractionConfig) -> Result<(), SetupError> {
    let page = PageElements::resolve(document)?;
    let body = document.body().ok_or(SetupError::MissingElement("body"))?;
    let root = document.create_element("div")?;
    root.set_id(LAYER_ROOT_ID);
    body.append_child(&root)?;

    yew::Renderer::<InteractionLayer>::with_root_and_props(
        root,
        InteractionLayerProps { config, page },
    )
    .render();

    Ok(())
}

fn start(document: &Document) {
    let config = read_config(document);
    let logger = Logger::new(config.log_level);

    if let Err(error) = mount(document, config) {
        logger.log(
            LogLevel::Warn,
            "interactions_setup_failed",
            json!({ "error": error.to_string() }),
        );
    }
}

pub fn run() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if document.ready_state() != DocumentReadyState::Loading {
        start(&document);
        return;
    }

    let mut pending = Some(document.clone());
    Listener::new(&document, "DOMContentLoaded", move |_| {
        if let Some(document) = pending.take() {
            start(&document);
        }
    })
    .forget();
}
