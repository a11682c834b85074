use crate::constants::DRAGGING_CLASS;
use crate::input;
use crate::listeners::ListenerSet;
use portfolio_core::{strip_transform, CarouselController};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct CarouselWiring {
    pub container: web::HtmlElement,
    pub strip: web::HtmlElement,
    pub controller: Rc<RefCell<CarouselController>>,
}

impl CarouselWiring {
    fn begin(&self, x: f32) {
        self.controller.borrow_mut().begin_drag(x);
        _ = self.container.class_list().add_1(DRAGGING_CLASS);
    }

    fn move_to(&self, x: f32) {
        let rotation = self.controller.borrow_mut().drag_to(x);
        if let Some(deg) = rotation {
            _ = self
                .strip
                .style()
                .set_property("transform", &strip_transform(deg));
        }
    }

    fn end(&self) {
        let mut controller = self.controller.borrow_mut();
        if !controller.is_dragging() {
            return;
        }
        controller.end_drag();
        _ = self.container.class_list().remove_1(DRAGGING_CLASS);
    }
}

pub fn wire_carousel_handlers(listeners: &mut ListenerSet, w: &CarouselWiring) {
    wire_mouse(listeners, w);
    wire_touch(listeners, w);
}

fn wire_mouse(listeners: &mut ListenerSet, w: &CarouselWiring) {
    let target = w.container.clone();

    let down = w.clone();
    listeners.add(&target, "mousedown", move |ev: web::MouseEvent| {
        down.begin(input::client_x(&ev));
    });

    let mv = w.clone();
    listeners.add(&target, "mousemove", move |ev: web::MouseEvent| {
        mv.move_to(input::client_x(&ev));
    });

    for event in ["mouseup", "mouseleave"] {
        let up = w.clone();
        listeners.add(&target, event, move |_: web::MouseEvent| up.end());
    }
}

fn wire_touch(listeners: &mut ListenerSet, w: &CarouselWiring) {
    let target = w.container.clone();

    let start = w.clone();
    listeners.add(&target, "touchstart", move |ev: web::TouchEvent| {
        if let Some(x) = input::first_touch_x(&ev) {
            start.begin(x);
        }
    });

    let mv = w.clone();
    listeners.add(&target, "touchmove", move |ev: web::TouchEvent| {
        if let Some(x) = input::first_touch_x(&ev) {
            mv.move_to(x);
        }
    });

    let end = w.clone();
    listeners.add(&target, "touchend", move |_: web::TouchEvent| end.end());
}
