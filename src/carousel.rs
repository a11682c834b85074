use crate::constants::{CAROUSEL_ITEM_CLASS, CAROUSEL_STRIP_CLASS};
use crate::dom;
use crate::events::{self, CarouselWiring};
use crate::listeners::ListenerSet;
use portfolio_core::content::Project;
use portfolio_core::{card_markup, card_transform, strip_transform, CarouselController, RingLayout};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The card ring built inside `#project-carousel`, plus its drag handlers.
pub struct CarouselMount {
    strip: web::HtmlElement,
    controller: Rc<RefCell<CarouselController>>,
    listeners: ListenerSet,
}

impl CarouselMount {
    pub fn mount(
        document: &web::Document,
        container: web::HtmlElement,
        projects: &[Project],
    ) -> anyhow::Result<Self> {
        let layout = RingLayout::build(projects);
        let strip = dom::create_html_element(document, "div")?;
        strip.set_class_name(CAROUSEL_STRIP_CLASS);
        _ = strip.style().set_property("transform", &strip_transform(0.0));

        for slot in layout.slots() {
            let item = dom::create_html_element(document, "div")?;
            item.set_class_name(CAROUSEL_ITEM_CLASS);
            _ = item.set_attribute("data-project", &slot.source_index.to_string());
            _ = item
                .style()
                .set_property("transform", &card_transform(slot.angle_deg));
            item.set_inner_html(&card_markup(slot));
            strip
                .append_child(&item)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        container
            .append_child(&strip)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let controller = Rc::new(RefCell::new(CarouselController::new()));
        let mut listeners = ListenerSet::new();
        events::wire_carousel_handlers(
            &mut listeners,
            &CarouselWiring {
                container,
                strip: strip.clone(),
                controller: controller.clone(),
            },
        );
        log::info!(
            "[carousel] mounted {} cards from {} projects",
            layout.len(),
            projects.len()
        );
        Ok(Self {
            strip,
            controller,
            listeners,
        })
    }

    pub fn rotation(&self) -> f32 {
        self.controller.borrow().rotation()
    }

    pub fn teardown(&mut self) {
        self.listeners.remove_all();
        self.strip.remove();
        log::info!("[carousel] torn down at {:.1}deg", self.rotation());
    }
}
