use std::mem;

use yew::prelude::*;
use web_sys::{Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use chrono::Local;
use log::debug;

use crate::chat::{
    can_send, reply_or_fallback, ChatLog, Sender, TypingEffect, REPLY_DELAY_MS, TYPING_INTERVAL_MS,
};

const FOCUS_DELAY_MS: u32 = 300;

pub enum ChatBotMsg {
    Toggle,
    Minimize,
    SetInput(String),
    Send,
    Reply(String),
    TypeTick,
    FocusInput,
}

pub struct ChatBot {
    open: bool,
    minimized: bool,
    log: ChatLog,
    input: String,
    loading: bool,
    typing: Option<TypingEffect>,
    typing_ticker: Option<Interval>,
    focus_timer: Option<Timeout>,
    scroll_pending: bool,
    messages_end: NodeRef,
    input_ref: NodeRef,
}

impl ChatBot {
    fn panel_visible(&self) -> bool {
        self.open && !self.minimized
    }

    /// Types the greeting out again whenever the panel becomes visible with
    /// nothing but the greeting in it. Any other state cancels the effect.
    fn restart_typing(&mut self, ctx: &Context<Self>) {
        self.typing = None;
        self.typing_ticker = None;

        if !self.panel_visible() || !self.log.is_fresh() {
            return;
        }
        if let Some(greeting) = self.log.messages().first() {
            self.typing = Some(TypingEffect::new(&greeting.text));
            let link = ctx.link().clone();
            self.typing_ticker = Some(Interval::new(TYPING_INTERVAL_MS, move || {
                link.send_message(ChatBotMsg::TypeTick)
            }));
        }
    }

    fn schedule_focus(&mut self, ctx: &Context<Self>) {
        if !self.panel_visible() {
            self.focus_timer = None;
            return;
        }
        let link = ctx.link().clone();
        self.focus_timer = Some(Timeout::new(FOCUS_DELAY_MS, move || {
            link.send_message(ChatBotMsg::FocusInput)
        }));
    }

    fn scroll_to_end(&self) {
        if let Some(end) = self.messages_end.cast::<Element>() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            end.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    fn view_messages(&self) -> Html {
        self.log
            .messages()
            .iter()
            .enumerate()
            .map(|(index, message)| {
                let side = match message.sender {
                    Sender::User => "chat-message-user",
                    Sender::Bot => "chat-message-bot",
                };
                let body = match (&self.typing, index) {
                    (Some(typing), 0) => html! {
                        <p>{typing.visible().to_string()}<span class="typing-cursor">{"|"}</span></p>
                    },
                    _ => html! { <p class="chat-text">{message.text.clone()}</p> },
                };
                html! {
                    <div key={message.id} class={classes!("chat-message", side)}>
                        { body }
                        <p class="chat-time">{message.time_label()}</p>
                    </div>
                }
            })
            .collect()
    }
}

impl Component for ChatBot {
    type Message = ChatBotMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            minimized: false,
            log: ChatLog::with_greeting(Local::now()),
            input: String::new(),
            loading: false,
            typing: None,
            typing_ticker: None,
            focus_timer: None,
            scroll_pending: false,
            messages_end: NodeRef::default(),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatBotMsg::Toggle => {
                self.open = !self.open;
                self.minimized = false;
                self.scroll_pending = true;
                self.restart_typing(ctx);
                self.schedule_focus(ctx);
                true
            }
            ChatBotMsg::Minimize => {
                self.minimized = !self.minimized;
                self.scroll_pending = true;
                self.restart_typing(ctx);
                self.schedule_focus(ctx);
                true
            }
            ChatBotMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatBotMsg::Send => {
                if !can_send(&self.input, self.loading) {
                    return false;
                }
                let text = mem::take(&mut self.input);
                self.log.push(text.clone(), Sender::User, Local::now());
                self.loading = true;
                self.scroll_pending = true;
                self.restart_typing(ctx);

                ctx.link().send_future(async move {
                    TimeoutFuture::new(REPLY_DELAY_MS).await;
                    ChatBotMsg::Reply(reply_or_fallback(&text).await)
                });
                true
            }
            ChatBotMsg::Reply(text) => {
                let id = self.log.push(text, Sender::Bot, Local::now()).id;
                debug!("Chat reply {} received", id);
                self.loading = false;
                self.scroll_pending = true;
                true
            }
            ChatBotMsg::TypeTick => {
                let still_typing = self.typing.as_mut().map_or(false, TypingEffect::tick);
                if !still_typing {
                    self.typing = None;
                    self.typing_ticker = None;
                }
                true
            }
            ChatBotMsg::FocusInput => {
                self.focus_timer = None;
                if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
                false
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_pending && self.panel_visible() {
            self.scroll_pending = false;
            self.scroll_to_end();
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_: MouseEvent| ChatBotMsg::Toggle);
        let minimize = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            ChatBotMsg::Minimize
        });
        let on_input = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatBotMsg::SetInput(input.value())
        });
        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatBotMsg::Send
        });
        let send_disabled = !can_send(&self.input, self.loading);

        html! {
            <div class="chatbot">
                <button onclick={toggle.clone()} class="chatbot-toggle" aria-label="Open chat">
                    { "💬" }
                </button>

                if self.open {
                    <div class={classes!("chatbot-panel", self.minimized.then(|| "minimized"))}>
                        <div class="chatbot-header">
                            <div class="chatbot-title">
                                <span class="chatbot-pulse">{ "💬" }</span>
                                <h3>{ "InjuryShield Assistant" }</h3>
                            </div>
                            <div class="chatbot-actions">
                                <button onclick={minimize} aria-label="Minimise chat">{ "▁" }</button>
                                <button onclick={toggle} aria-label="Close chat">{ "✕" }</button>
                            </div>
                        </div>

                        if !self.minimized {
                            <div class="chatbot-messages">
                                { self.view_messages() }
                                if self.loading {
                                    <div class="chat-message chat-message-bot">
                                        <div class="typing-dots">
                                            <span></span>
                                            <span></span>
                                            <span></span>
                                        </div>
                                    </div>
                                }
                                <div ref={self.messages_end.clone()}></div>
                            </div>
                            <form class="chatbot-form" onsubmit={on_submit}>
                                <input
                                    ref={self.input_ref.clone()}
                                    type="text"
                                    value={self.input.clone()}
                                    oninput={on_input}
                                    placeholder="Ask anything..."
                                />
                                <button type="submit" disabled={send_disabled}>
                                    if self.loading {
                                        <span class="spinner"></span>
                                    } else {
                                        { "➤" }
                                    }
                                </button>
                            </form>
                        }
                    </div>
                }

                <style>
                    {r#"
                    .chatbot {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 50;
                        display: flex;
                        flex-direction: column-reverse;
                        align-items: flex-end;
                    }
                    .chatbot-toggle {
                        background: #ef4444;
                        color: #fff;
                        border: none;
                        border-radius: 9999px;
                        padding: 1rem;
                        font-size: 1.5rem;
                        cursor: pointer;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                        transition: all 0.3s ease;
                    }
                    .chatbot-toggle:hover { background: #dc2626; transform: scale(1.05); }
                    .chatbot-panel {
                        background: #111827;
                        border: 1px solid #1f2937;
                        border-radius: 0.75rem;
                        display: flex;
                        flex-direction: column;
                        width: 24rem;
                        height: 24rem;
                        margin-bottom: 1rem;
                        animation: chatFadeIn 0.3s ease-in-out;
                        transition: all 0.3s ease;
                    }
                    .chatbot-panel.minimized { width: 16rem; height: 4rem; animation: none; }
                    .chatbot-header {
                        background: #000;
                        border-radius: 0.75rem 0.75rem 0 0;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        border-bottom: 1px solid #1f2937;
                    }
                    .chatbot-title { display: flex; align-items: center; gap: 0.5rem; }
                    .chatbot-title h3 { margin: 0; font-size: 1rem; }
                    .chatbot-pulse { color: #ef4444; animation: chatPulse 2s infinite; }
                    .chatbot-actions button {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .chatbot-actions button:hover { color: #fff; transform: scale(1.1); }
                    .chatbot-messages {
                        flex: 1;
                        padding: 1rem;
                        overflow-y: auto;
                        background: linear-gradient(to bottom, #111827, #030712);
                    }
                    .chat-message { max-width: 80%; margin-bottom: 1rem; border-radius: 0.75rem; padding: 0.75rem; }
                    .chat-message-user {
                        margin-left: auto;
                        background: linear-gradient(to right, #ef4444, #dc2626);
                        animation: chatSlideInRight 0.3s ease-out;
                    }
                    .chat-message-bot {
                        margin-right: auto;
                        background: linear-gradient(to right, #1f2937, #374151);
                        animation: chatSlideInLeft 0.3s ease-out;
                    }
                    .chat-message p { margin: 0; }
                    .chat-text { white-space: pre-wrap; }
                    .chat-time { font-size: 0.75rem; opacity: 0.7; margin-top: 0.25rem !important; }
                    .typing-cursor { animation: chatPulse 1s infinite; }
                    .typing-dots { display: flex; gap: 0.5rem; }
                    .typing-dots span {
                        width: 0.5rem;
                        height: 0.5rem;
                        background: #f87171;
                        border-radius: 9999px;
                        animation: chatBounce 1s infinite;
                    }
                    .typing-dots span:nth-child(2) { animation-delay: 200ms; }
                    .typing-dots span:nth-child(3) { animation-delay: 400ms; }
                    .chatbot-form { display: flex; padding: 0.75rem; border-top: 1px solid #1f2937; }
                    .chatbot-form input {
                        flex: 1;
                        background: #1f2937;
                        color: #fff;
                        border: none;
                        border-radius: 0.5rem 0 0 0.5rem;
                        padding: 0.5rem 1rem;
                    }
                    .chatbot-form input:focus { outline: 2px solid #ef4444; }
                    .chatbot-form button {
                        background: #ef4444;
                        color: #fff;
                        border: none;
                        border-radius: 0 0.5rem 0.5rem 0;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                    }
                    .chatbot-form button:disabled { opacity: 0.5; cursor: not-allowed; }
                    .spinner {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        border-top-color: #fff;
                        border-radius: 9999px;
                        animation: chatSpin 0.8s linear infinite;
                    }
                    @keyframes chatFadeIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes chatSlideInRight {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes chatSlideInLeft {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    @keyframes chatPulse { 50% { opacity: 0.4; } }
                    @keyframes chatBounce { 50% { transform: translateY(-0.25rem); } }
                    @keyframes chatSpin { to { transform: rotate(360deg); } }
                    @media (max-width: 640px) {
                        .chatbot-panel { width: 20rem; }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
