use super::bindings::index_of;
use super::context::{apply, Installed, Shared};
use super::listener::Observer;
use crate::error::EnhanceError;
use crate::model::page::{PageSignals, Target};

pub fn install(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let images = &ctx.bindings.lazy_images;
    if images.is_empty() {
        return Ok(Installed::default());
    }

    let observer = {
        let ctx = ctx.clone();
        Observer::new(None, None, move |entry, observer| {
            let Some(image) = index_of(&ctx.bindings.lazy_images, &entry.target()) else {
                return;
            };
            let effects = ctx
                .model
                .borrow_mut()
                .on_intersect(Target::Image(image), entry.is_intersecting());
            for effect in effects {
                apply(&ctx, effect, Some(observer));
            }
        })?
    };

    for img in images {
        observer.observe(img);
    }
    Ok(Installed::observer(observer))
}
