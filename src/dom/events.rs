// ============================================================================
// EVENT HANDLING
// ============================================================================
// Los closures de listeners en elementos quedan en LISTENERS hasta el próximo
// render completo, que llama a release_listeners() antes de vaciar el DOM.
// Nunca se renderiza dentro de un handler (los re-render van por Timeout), así
// que un closure no se suelta mientras se ejecuta.
// Listeners globales (window): registrar UNA sola vez al arrancar, con forget().
// ============================================================================

use std::any::Any;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, InputEvent, MouseEvent, SubmitEvent};

thread_local! {
    static LISTENERS: RefCell<Vec<Box<dyn Any>>> = RefCell::new(Vec::new());
}

/// Mantiene vivo un listener hasta el próximo `release_listeners`
pub fn keep_listener<T: Any>(listener: T) {
    LISTENERS.with(|listeners| listeners.borrow_mut().push(Box::new(listener)));
}

/// Suelta los listeners del render anterior; devuelve cuántos había
pub fn release_listeners() -> usize {
    let released = LISTENERS.with(|listeners| std::mem::take(&mut *listeners.borrow_mut()));
    released.len()
}

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    keep_listener(closure);
    Ok(())
}

pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    keep_listener(closure);
    Ok(())
}

/// Submit con preventDefault ya aplicado
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: SubmitEvent| {
        e.prevent_default();
        handler();
    }) as Box<dyn FnMut(SubmitEvent)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    keep_listener(closure);
    Ok(())
}

/// Listener global en window (solo al arrancar)
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn release_drops_kept_listeners() {
        release_listeners();
        let handle = Rc::new(());
        keep_listener(handle.clone());
        keep_listener(handle.clone());
        assert_eq!(Rc::strong_count(&handle), 3);

        assert_eq!(release_listeners(), 2);
        assert_eq!(Rc::strong_count(&handle), 1);
        assert_eq!(release_listeners(), 0);
    }
}
