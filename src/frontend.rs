use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, MouseEvent};
use yew::prelude::*;

use crate::anim::{self, Spring, StagePose, STAGE_SPRING_DAMPING, STAGE_SPRING_STIFFNESS};
use crate::content::{
    card_layout, drift_duration_secs, format_axis, format_clock, frame_reference, glyph_position,
    GalleryImage, BRAND, DATA_STRINGS, FIRMWARE_TAG, GALLERY_IMAGES, GLYPH_COUNT, MAP_EMBED_URL,
    MODEL, RETICLE_COUNT, SPEC_ROWS, STAGE_COPY,
};

const INTRO_FADE_START_MS: u32 = 1_400;
const INTRO_COMPLETE_MS: u32 = 2_000;
const STAGE_COPY_STAGGER_MS: usize = 150;

fn page_scroll_progress() -> f64 {
    let Some(win) = window() else {
        return 0.0;
    };

    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let scroll_height = win
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    anim::page_progress(scroll_y, scroll_height, viewport_height)
}

fn current_clock_string() -> String {
    let now = js_sys::Date::new_0();
    format_clock(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Live page scroll progress in [0,1]. One writer (the scroll listener),
/// removed again on unmount; readers only derive values from it.
#[hook]
fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            progress.set(page_scroll_progress());

            let on_scroll = Closure::<dyn FnMut()>::new({
                let progress = progress.clone();
                move || progress.set(page_scroll_progress())
            });
            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *progress
}

/// Wall-clock readout, re-sampled once per second while mounted. Dropping
/// the Interval on cleanup stops the ticks.
#[hook]
fn use_clock() -> String {
    let clock = use_state(current_clock_string);

    {
        let clock = clock.clone();
        use_effect_with((), move |_| {
            let ticker = Interval::new(1_000, move || clock.set(current_clock_string()));
            move || drop(ticker)
        });
    }

    (*clock).clone()
}

/// Most recent pointer position, (0,0) before the first move event.
#[hook]
fn use_pointer() -> (i32, i32) {
    let pointer = use_state(|| (0, 0));

    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                pointer.set((event.client_x().max(0), event.client_y().max(0)));
            });
            if let Some(win) = window() {
                let _ = win
                    .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window() {
                    let _ = win.remove_event_listener_with_callback(
                        "mousemove",
                        on_move.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    *pointer
}

/// True once the referenced element has been on screen. The observer
/// disconnects after the first intersection, so the reveal never replays.
#[hook]
fn use_reveal_once(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with((), move |_| {
            let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                let revealed = revealed.clone();
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let on_screen = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|entry| entry.is_intersecting())
                            .unwrap_or(false)
                    });
                    if on_screen {
                        revealed.set(true);
                        observer.disconnect();
                    }
                }
            });

            let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()).ok();
            match (observer.as_ref(), node.cast::<Element>()) {
                (Some(observer), Some(element)) => observer.observe(&element),
                // No observer support: show the content rather than hide it.
                _ => revealed.set(true),
            }

            move || {
                if let Some(observer) = observer {
                    observer.disconnect();
                }
                drop(on_intersect);
            }
        });
    }

    *revealed
}

#[derive(Properties, PartialEq)]
struct TechLabelProps {
    label: AttrValue,
    value: AttrValue,
}

#[function_component(TechLabel)]
fn tech_label(props: &TechLabelProps) -> Html {
    html! {
        <span class="tech-label">
            <span class="tech-label-key">{props.label.clone()}{":"}</span>
            {" "}
            <span class="tech-label-value">{props.value.clone()}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct FlashIntroProps {
    on_complete: Callback<()>,
}

/// Opaque boot overlay. Fade starts at a fixed delay and the completion
/// callback fires once at the 2s mark; both timers cancel on unmount.
#[function_component(FlashIntro)]
fn flash_intro(props: &FlashIntroProps) -> Html {
    let fading = use_state(|| false);

    {
        let fading = fading.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with((), move |_| {
            let fade = Timeout::new(INTRO_FADE_START_MS, move || fading.set(true));
            let complete = Timeout::new(INTRO_COMPLETE_MS, move || on_complete.emit(()));
            move || {
                drop(fade);
                drop(complete);
            }
        });
    }

    html! {
        <div
            class={classes!("flash-intro", (*fading).then_some("is-fading"))}
            aria-hidden="true"
        >
            <span class="flash-intro-mark">{BRAND}{" "}{MODEL}</span>
            <span class="flash-intro-sub">{"INITIALIZING OPTICAL STACK"}</span>
        </div>
    }
}

#[function_component(BackgroundElements)]
fn background_elements() -> Html {
    // Drift timing for the data-string motif is the one intentionally random
    // piece of the backdrop; frozen per mount so re-renders don't reshuffle
    // loops already in flight.
    let drifts = use_memo((), |_| {
        DATA_STRINGS
            .iter()
            .map(|_| {
                let duration = drift_duration_secs(js_sys::Math::random());
                let leftward = js_sys::Math::random() < 0.5;
                (duration, leftward)
            })
            .collect::<Vec<(f64, bool)>>()
    });

    html! {
        <div class="backdrop" aria-hidden="true">
            { for (0..GLYPH_COUNT).map(|index| {
                let (left, top) = glyph_position(index);
                let style = format!(
                    "left: {left:.0}%; top: {top:.0}%; animation-delay: {:.1}s;",
                    index as f64 * 1.5
                );
                html! { <span class="backdrop-glyph" style={style}>{"✛"}</span> }
            }) }
            { for (0..RETICLE_COUNT).map(|index| {
                let style = format!(
                    "left: {}%; top: {}%; animation-delay: {:.1}s;",
                    18 + index * 27,
                    68 - index * 19,
                    index as f64 * 2.0
                );
                html! { <span class="backdrop-reticle" style={style}></span> }
            }) }
            { for DATA_STRINGS.iter().enumerate().map(|(index, text)| {
                let (duration, leftward) = drifts[index];
                let direction = if leftward { "drift-left" } else { "drift-right" };
                let style = format!(
                    "top: {}%; animation-duration: {duration:.1}s;",
                    6 + index * 19
                );
                html! {
                    <span class={classes!("backdrop-stream", direction)} style={style}>
                        {*text}
                    </span>
                }
            }) }
        </div>
    }
}

#[function_component(Hud)]
fn hud() -> Html {
    let clock = use_clock();
    let (pointer_x, pointer_y) = use_pointer();

    html! {
        <div class="hud" aria-hidden="true">
            <div class="hud-bar hud-bar-top">
                <span class="hud-rec"><span class="hud-rec-dot"></span>{"REC"}</span>
                <span class="hud-ident">{BRAND}{" "}{MODEL}{" // "}{FIRMWARE_TAG}</span>
                <span class="hud-clock">{clock}</span>
            </div>

            <div class="hud-thirds">
                <span class="hud-line hud-line-v" style="left: 33.33%;"></span>
                <span class="hud-line hud-line-v" style="left: 66.66%;"></span>
                <span class="hud-line hud-line-h" style="top: 33.33%;"></span>
                <span class="hud-line hud-line-h" style="top: 66.66%;"></span>
            </div>

            <div class="hud-focus">
                <span class="hud-corner hud-corner-tl"></span>
                <span class="hud-corner hud-corner-tr"></span>
                <span class="hud-corner hud-corner-bl"></span>
                <span class="hud-corner hud-corner-br"></span>
                <span class="hud-cross">{"+"}</span>
            </div>

            <div class="hud-bar hud-bar-bottom">
                <TechLabel label="POS_X" value={format_axis(pointer_x)} />
                <TechLabel label="POS_Y" value={format_axis(pointer_y)} />
                <TechLabel label="AF" value="LOCK" />
                <TechLabel label="ISO" value="0100" />
                <span class="hud-battery">
                    <span class="hud-battery-fill"></span>
                </span>
            </div>
        </div>
    }
}

pub enum StageMsg {
    Scrolled(f64),
    Frame(f64),
}

/// Hero stage. Scroll drives the raw pose; scale and tilt chase it through
/// springs stepped on an animation-frame loop that parks itself once both
/// filters settle.
pub struct CameraStage {
    pose: StagePose,
    scale: Spring,
    tilt: Spring,
    frame: Option<AnimationFrame>,
    last_timestamp: Option<f64>,
    scroll_listener: Option<Closure<dyn FnMut()>>,
}

impl CameraStage {
    fn schedule_frame(&mut self, ctx: &Context<Self>) {
        if self.frame.is_some() {
            return;
        }
        let link = ctx.link().clone();
        self.frame = Some(request_animation_frame(move |timestamp| {
            link.send_message(StageMsg::Frame(timestamp));
        }));
    }
}

impl Component for CameraStage {
    type Message = StageMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            link.send_message(StageMsg::Scrolled(page_scroll_progress()));
        });
        if let Some(win) = window() {
            let _ =
                win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }

        let pose = StagePose::at(page_scroll_progress());
        Self {
            pose,
            scale: Spring::new(STAGE_SPRING_STIFFNESS, STAGE_SPRING_DAMPING, pose.scale),
            tilt: Spring::new(STAGE_SPRING_STIFFNESS, STAGE_SPRING_DAMPING, pose.rotation_deg),
            frame: None,
            last_timestamp: None,
            scroll_listener: Some(on_scroll),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StageMsg::Scrolled(progress) => {
                self.pose = StagePose::at(progress);
                self.schedule_frame(ctx);
                true
            }
            StageMsg::Frame(timestamp) => {
                let dt = match self.last_timestamp {
                    Some(previous) => ((timestamp - previous) / 1_000.0).max(0.0),
                    None => 1.0 / 60.0,
                };
                self.last_timestamp = Some(timestamp);
                self.frame = None;

                self.scale.step(self.pose.scale, dt);
                self.tilt.step(self.pose.rotation_deg, dt);

                if self.scale.settled(self.pose.scale) && self.tilt.settled(self.pose.rotation_deg)
                {
                    self.scale.snap(self.pose.scale);
                    self.tilt.snap(self.pose.rotation_deg);
                    self.last_timestamp = None;
                } else {
                    self.schedule_frame(ctx);
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.schedule_frame(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.frame = None;
        if let (Some(win), Some(listener)) = (window(), self.scroll_listener.take()) {
            let _ = win
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let camera_style = format!(
            "transform: translateY({:.1}px) rotate({:.2}deg) scale({:.4}); opacity: {:.3};",
            self.pose.offset_y,
            self.tilt.value(),
            self.scale.value(),
            self.pose.opacity
        );

        html! {
            <section class="stage" id="stage">
                <h1 class="stage-title">
                    {BRAND}
                    <span class="stage-title-model">{" "}{MODEL}</span>
                </h1>
                <p class="stage-sub">{"Full-frame. Fully yours."}</p>

                <div class="stage-camera" style={camera_style}>
                    <div class="stage-camera-sway">
                        <img
                            class="stage-camera-img"
                            src="assets/camera.svg"
                            alt="VANTA V-1 camera body"
                        />
                    </div>
                    <div class="stage-readout">
                        <TechLabel label="BODY" value="V-1" />
                        <TechLabel label="SENSOR" value="61MP" />
                        <TechLabel label="IBIS" value="8.0EV" />
                    </div>
                </div>

                <div class="stage-copy-row">
                    { for STAGE_COPY.iter().enumerate().map(|(index, (title, body))| html! {
                        <StageCopyBlock {index} title={*title} body={*body} />
                    }) }
                </div>
            </section>
        }
    }
}

#[derive(Properties, PartialEq)]
struct StageCopyBlockProps {
    index: usize,
    title: AttrValue,
    body: AttrValue,
}

#[function_component(StageCopyBlock)]
fn stage_copy_block(props: &StageCopyBlockProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());
    let style = format!("transition-delay: {}ms;", props.index * STAGE_COPY_STAGGER_MS);

    html! {
        <article
            ref={node}
            class={classes!("stage-copy", revealed.then_some("is-revealed"))}
            style={style}
        >
            <h2>{props.title.clone()}</h2>
            <p>{props.body.clone()}</p>
        </article>
    }
}

#[function_component(Gallery)]
fn gallery() -> Html {
    let progress = use_scroll_progress();

    html! {
        <section class="gallery" id="gallery">
            <header class="section-head">
                <h2>{"FIELD GALLERY"}</h2>
                <span class="section-tag">{"06 FRAMES / PRODUCTION BODIES"}</span>
            </header>
            <div class="gallery-grid">
                { for GALLERY_IMAGES.iter().enumerate().map(|(index, image)| html! {
                    <GalleryCard key={image.title} {index} image={*image} {progress} />
                }) }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryCardProps {
    index: usize,
    image: GalleryImage,
    progress: f64,
}

#[function_component(GalleryCard)]
fn gallery_card(props: &GalleryCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal_once(node.clone());
    // One draw per card per mount; the overlay is cosmetic and must not
    // churn on unrelated re-renders.
    let reference = use_state(|| frame_reference(js_sys::Math::random()));

    let layout = card_layout(props.index, props.image.size);
    let offset = anim::parallax_offset(props.progress, props.image.parallax);
    let style = format!("transform: translateY({offset:.1}px);");

    html! {
        <figure
            ref={node}
            class={classes!(
                "gallery-card",
                layout.span_class,
                layout.drop_class,
                revealed.then_some("is-revealed")
            )}
            style={style}
        >
            <div class="gallery-frame">
                <img src={props.image.url} alt={props.image.title} loading="lazy" />
                <span class="gallery-ref">{(*reference).clone()}</span>
            </div>
            <figcaption>
                <span class="gallery-title">{props.image.title}</span>
                <span class="gallery-meta">{props.image.meta}</span>
            </figcaption>
        </figure>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section class="section-block" id="about">
            <header class="section-head">
                <h2>{"ABOUT THE BODY"}</h2>
                <span class="section-tag">{"DESIGN BRIEF 004"}</span>
            </header>
            <p class="section-lead">
                {"The V-1 started as a single constraint: every control a \
                  photographer touches in the dark had to be findable by feel. \
                  Everything else — the sensor, the stabilizer, the weather \
                  sealing — was built outward from that grip."}
            </p>
            <div class="about-readout">
                <TechLabel label="ORIGIN" value="TOKYO" />
                <TechLabel label="CYCLE" value="4 YRS" />
                <TechLabel label="PROTOTYPES" value="0027" />
                <TechLabel label="SHUTTER RATED" value="500K" />
            </div>
        </section>
    }
}

#[function_component(SpecsSection)]
fn specs_section() -> Html {
    html! {
        <section class="section-block" id="specs">
            <header class="section-head">
                <h2>{"SPECIFICATIONS"}</h2>
                <span class="section-tag">{FIRMWARE_TAG}</span>
            </header>
            <dl class="spec-sheet">
                { for SPEC_ROWS.iter().map(|row| html! {
                    <div class="spec-row" key={row.label}>
                        <dt>{row.label}</dt>
                        <dd>{row.value}</dd>
                    </div>
                }) }
            </dl>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section class="section-block" id="contact">
            <header class="section-head">
                <h2>{"SHOWROOM"}</h2>
                <span class="section-tag">{"MINATO, TOKYO"}</span>
            </header>
            <div class="contact-grid">
                <div class="contact-copy">
                    <p>{"Book a handling session and bring your own glass — \
                         the VX mount adapter wall covers most of it."}</p>
                    <TechLabel label="MAIL" value="showroom@vanta.camera" />
                    <TechLabel label="HOURS" value="10:00–19:00 JST" />
                    <div class="contact-loader" aria-hidden="true">
                        <span class="contact-loader-bar"></span>
                    </div>
                </div>
                <iframe
                    class="contact-map"
                    src={MAP_EMBED_URL}
                    title="Showroom location"
                    loading="lazy"
                />
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <span>{BRAND}{" OPTICAL CO."}</span>
            <span class="site-footer-note">{"THE V-1 IS A FICTIONAL CAMERA. THE LIGHT IS REAL."}</span>
        </footer>
    }
}

#[function_component(App)]
fn app() -> Html {
    let loaded = use_state(|| false);

    let on_intro_complete = {
        let loaded = loaded.clone();
        Callback::from(move |_| {
            if !*loaded {
                loaded.set(true);
            }
        })
    };

    html! {
        <>
            <BackgroundElements />
            <Hud />
            { (!*loaded).then(|| html! { <FlashIntro on_complete={on_intro_complete.clone()} /> }) }
            <main class={classes!("site", (*loaded).then_some("is-loaded"))}>
                <CameraStage />
                <AboutSection />
                <SpecsSection />
                <Gallery />
                <ContactSection />
                <Footer />
            </main>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
