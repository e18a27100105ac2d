use chrono::Local;
use yew::prelude::*;

use crate::booking::modal::{ModalAction, ModalState};
use crate::components::{
    booking_modal::BookingModal,
    carousel::use_carousel,
    contact_float::ContactFloat,
    lightbox::Lightbox,
    nav::Nav,
    reveal::{use_parallax, Reveal},
    scroll_top::ScrollTopButton,
};
use crate::config;
use crate::content::{GalleryImage, Room, SiteContent, Slide, Testimonial};

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    let modal = use_reducer_eq(ModalState::default);

    let open_booking = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |room_type: Option<String>| {
            dispatcher.dispatch(ModalAction::Open {
                room_type,
                today: Local::now().date_naive(),
            });
        })
    };

    let book_any_room = open_booking.reform(|_: ()| None);

    let room_types: Vec<AttrValue> = content
        .room_types()
        .into_iter()
        .map(AttrValue::from)
        .collect();

    html! {
        <div class="landing-page">
            <Nav on_book={book_any_room.clone()} />
            <Hero slides={content.hero_slides.clone()} on_book={book_any_room} />

            <section id="about" class="about">
                <div class="container">
                    <div class="about-content">
                        <Reveal class={classes!("about-text")}>
                            <h2>{format!("About {}", config::HOTEL_NAME)}</h2>
                            { for content.about.iter().map(|p| html! { <p>{p}</p> }) }
                        </Reveal>
                        <Reveal class={classes!("about-image")}>
                            <img src="/assets/about.jpg" alt={config::HOTEL_NAME} loading="lazy" />
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="rooms" class="rooms">
                <div class="container">
                    <h2 class="section-title">{"Our Rooms"}</h2>
                    <div class="rooms-grid">
                        { for content.rooms.iter().map(|room| html! {
                            <RoomCard room={room.clone()} on_book={open_booking.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="amenities" class="amenities">
                <div class="container">
                    <h2 class="section-title">{"Amenities"}</h2>
                    <div class="amenities-grid">
                        { for content.amenities.iter().map(|a| html! {
                            <Reveal class={classes!("amenity-card")}>
                                <i class={classes!("fas", a.icon.clone())}></i>
                                <h3>{&a.title}</h3>
                                <p>{&a.description}</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <Gallery images={content.gallery.clone()} />
            <Testimonials items={content.testimonials.clone()} />

            <section id="contact" class="contact">
                <div class="container">
                    <h2 class="section-title">{"Contact Us"}</h2>
                    <div class="contact-info">
                        <p><i class="fas fa-map-marker-alt"></i>{" "}{&content.contact.address}</p>
                        <p><i class="fas fa-phone"></i>{" "}{&content.contact.phone}</p>
                        <p><i class="fas fa-envelope"></i>{" "}{&content.contact.email}</p>
                    </div>
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} {}. All rights reserved.", Local::now().format("%Y"), config::HOTEL_NAME)}</p>
            </footer>

            <BookingModal state={modal} {room_types} />
            <ContactFloat />
            <ScrollTopButton />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    slides: Vec<Slide>,
    on_book: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    let carousel = use_carousel(props.slides.len(), config::HERO_INTERVAL_MS);
    let parallax = use_parallax();
    let on_book = props.on_book.reform(|_: MouseEvent| ());

    html! {
        <header id="home" class="hero" style={parallax}>
            <div class="hero-slider">
                { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                    <div
                        class={classes!("slide", carousel.is_active(i).then(|| "active"))}
                        style={format!("background-image: url('{}');", slide.image)}
                    >
                        <div class="hero-content">
                            <h1>{&slide.title}</h1>
                            <p>{&slide.subtitle}</p>
                            <button class="cta-button" onclick={on_book.clone()}>{"Book Your Stay"}</button>
                        </div>
                    </div>
                }) }
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct RoomCardProps {
    room: Room,
    on_book: Callback<Option<String>>,
}

#[function_component(RoomCard)]
fn room_card(props: &RoomCardProps) -> Html {
    let room = &props.room;
    let book = {
        let name = room.name.clone();
        props.on_book.reform(move |_: MouseEvent| Some(name.clone()))
    };

    html! {
        <Reveal class={classes!("room-card")}>
            <img src={room.image.clone()} alt={room.name.clone()} loading="lazy" />
            <div class="room-info">
                <h3>{&room.name}</h3>
                <p>{&room.description}</p>
                <ul class="room-features">
                    { for room.features.iter().map(|f| html! { <li>{f}</li> }) }
                </ul>
                <div class="room-price">{format!("₹{} / night", room.price_per_night)}</div>
                <button class="book-button" onclick={book}>{"Book Now"}</button>
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
struct GalleryProps {
    images: Vec<GalleryImage>,
}

#[function_component(Gallery)]
fn gallery(props: &GalleryProps) -> Html {
    let open = use_state(|| None::<usize>);
    let close = {
        let open = open.clone();
        Callback::from(move |_: ()| open.set(None))
    };

    html! {
        <section id="gallery" class="gallery">
            <div class="container">
                <h2 class="section-title">{"Gallery"}</h2>
                <div class="gallery-grid">
                    { for props.images.iter().enumerate().map(|(i, img)| {
                        let open = open.clone();
                        let onclick = Callback::from(move |_: MouseEvent| open.set(Some(i)));
                        html! {
                            <Reveal class={classes!("gallery-item")}>
                                <div class="gallery-image" {onclick}>
                                    <img src={img.image.clone()} alt={img.caption.clone()} loading="lazy" />
                                    <div class="gallery-caption">{&img.caption}</div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
            if let Some(img) = (*open).and_then(|i| props.images.get(i)) {
                <Lightbox src={img.image.clone()} alt={img.caption.clone()} on_close={close} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialsProps {
    items: Vec<Testimonial>,
}

#[function_component(Testimonials)]
fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = use_carousel(props.items.len(), config::TESTIMONIAL_INTERVAL_MS);

    html! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <h2 class="section-title">{"What Our Guests Say"}</h2>
                <div class="testimonial-slider">
                    { for props.items.iter().enumerate().map(|(i, t)| html! {
                        <div class={classes!("testimonial", carousel.is_active(i).then(|| "active"))}>
                            <div class="stars">
                                { for (0..t.rating).map(|_| html! { <i class="fas fa-star"></i> }) }
                            </div>
                            <p class="quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                            <div class="author">
                                <strong>{&t.author}</strong>
                                <span>{&t.origin}</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
