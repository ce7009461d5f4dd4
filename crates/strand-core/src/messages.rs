use std::fmt::Display;

use serde_json::{Map, Value};
use strand_models::{Embed, Payload};

use crate::stack::Layer;
use crate::status::Status;
use crate::trace::Traced;
use crate::{Method, ResponseCallback, RestRequest, StackError, Transport};

/// Channel message operations.
///
/// Channel and message IDs take anything `Display`, so both snowflake
/// integers and their string form work.
pub trait Messaging: Transport {
    /// `POST /channels/{channel}/messages`.
    ///
    /// The body carries `content`, plus `embed` when one is given. Empty
    /// content alongside an embed is left out so the embed stands alone.
    fn send_message<C: Display>(
        &self,
        channel: C,
        content: &str,
        embed: Option<&Embed>,
        callback: Option<ResponseCallback>,
    ) -> Result<(), StackError> {
        let request = RestRequest::new(Method::Post, format!("/channels/{channel}/messages"))
            .with_body(message_body(content, embed)?);
        self.call(request, callback);
        Ok(())
    }

    /// `PATCH /channels/{channel}/messages/{message}`, same body rules as
    /// [`Messaging::send_message`].
    fn edit_message<C: Display, M: Display>(
        &self,
        channel: C,
        message: M,
        content: &str,
        embed: Option<&Embed>,
        callback: Option<ResponseCallback>,
    ) -> Result<(), StackError> {
        let request = RestRequest::new(
            Method::Patch,
            format!("/channels/{channel}/messages/{message}"),
        )
        .with_body(message_body(content, embed)?);
        self.call(request, callback);
        Ok(())
    }

    fn delete_message<C: Display, M: Display>(
        &self,
        channel: C,
        message: M,
        callback: Option<ResponseCallback>,
    ) {
        self.call(
            RestRequest::new(
                Method::Delete,
                format!("/channels/{channel}/messages/{message}"),
            ),
            callback,
        );
    }

    fn trigger_typing<C: Display>(&self, channel: C, callback: Option<ResponseCallback>) {
        self.call(
            RestRequest::new(Method::Post, format!("/channels/{channel}/typing")),
            callback,
        );
    }
}

fn message_body(content: &str, embed: Option<&Embed>) -> serde_json::Result<Value> {
    let mut body = Map::new();
    if embed.is_none() || !content.is_empty() {
        body.insert("content".into(), Value::from(content));
    }
    if let Some(embed) = embed {
        body.insert("embed".into(), embed.to_json()?);
    }
    Ok(Value::Object(body))
}

/// Plugin layer providing [`Messaging`].
#[derive(Debug, Clone, Default)]
pub struct Messages<B> {
    inner: B,
}

impl<B> Messages<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

crate::delegate_transport!(Messages);

impl<B: Transport> Messaging for Messages<B> {}
impl<B: Messaging> Messaging for Status<B> {}
impl<B: Messaging> Messaging for Traced<B> {}

#[derive(Debug, Clone, Copy, Default)]
pub struct MessagesLayer;

impl<B: Transport> Layer<B> for MessagesLayer {
    type Stacked = Messages<B>;

    fn stack(self, inner: B) -> Messages<B> {
        Messages::new(inner)
    }
}
