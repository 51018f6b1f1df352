//! Error bodies.

use salvo::{
    catcher::Catcher,
    http::{ResBody, header::CONTENT_TYPE},
    prelude::*,
};

/// Writes a `StatusError` brief as the whole `text/plain` body.
///
/// Errors without a brief fall through to the default catcher.
#[handler]
async fn brief_as_text(res: &mut Response, ctrl: &mut FlowCtrl) {
    let ResBody::Error(error) = &res.body else {
        return;
    };

    let brief = error.brief.clone();

    res.headers_mut().remove(CONTENT_TYPE);
    res.render(Text::Plain(brief));

    ctrl.skip_rest();
}

pub(crate) fn plain_text() -> Catcher {
    Catcher::default().hoop(brief_as_text)
}
