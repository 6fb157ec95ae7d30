//! JavaScript run in the webview through `document::eval`.

use services::voice::RecognitionConfig;
use services::{ListenTicket, Utterance};

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Reports which speech capabilities exist and which voices are installed.
///
/// Chromium fills the voice list lazily, so wait briefly for `voiceschanged`
/// when it starts out empty.
pub(super) fn probe_script(check_input: bool, check_output: bool) -> String {
    format!(
        r"const checkInput = {check_input};
        const checkOutput = {check_output};
        const recognition = checkInput
            && !!(window.SpeechRecognition || window.webkitSpeechRecognition);
        const synthesis = checkOutput && ('speechSynthesis' in window);
        let voices = [];
        if (synthesis) {{
            voices = window.speechSynthesis.getVoices();
            if (!voices.length) {{
                await new Promise((resolve) => {{
                    const timer = setTimeout(resolve, 1000);
                    window.speechSynthesis.addEventListener('voiceschanged', () => {{
                        clearTimeout(timer);
                        resolve();
                    }}, {{ once: true }});
                }});
                voices = window.speechSynthesis.getVoices();
            }}
        }}
        return {{
            recognition,
            synthesis,
            voices: voices.map((voice) => ({{ name: voice.name, lang: voice.lang }})),
        }};"
    )
}

pub(super) fn cancel_speech_script() -> &'static str {
    "if ('speechSynthesis' in window) { window.speechSynthesis.cancel(); }"
}

pub(super) fn speak_script(utterance: &Utterance) -> String {
    let text = js_string(&utterance.text);
    let voice = utterance
        .voice
        .as_deref()
        .map_or_else(|| "null".to_string(), js_string);
    format!(
        r"try {{
            const synth = window.speechSynthesis;
            synth.cancel();
            const utterance = new SpeechSynthesisUtterance({text});
            utterance.rate = {rate};
            utterance.pitch = {pitch};
            utterance.volume = {volume};
            const voiceName = {voice};
            if (voiceName !== null) {{
                const match = synth.getVoices().find((voice) => voice.name === voiceName);
                if (match) utterance.voice = match;
            }}
            synth.speak(utterance);
            return {{ ok: true, error: null }};
        }} catch (err) {{
            return {{ ok: false, error: String(err) }};
        }}",
        rate = utterance.rate,
        pitch = utterance.pitch,
        volume = utterance.volume,
    )
}

/// Runs one recognition session and streams its lifecycle through
/// `dioxus.send`, finishing with an `end` message.
pub(super) fn recognition_script(ticket: ListenTicket, config: &RecognitionConfig) -> String {
    format!(
        r#"const ticket = {ticket};
        const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
        if (!Recognition) {{
            dioxus.send({{ kind: "error", error: "not-supported" }});
            dioxus.send({{ kind: "end" }});
            return;
        }}
        const registry = window.__quizRecognition || (window.__quizRecognition = {{}});
        if (registry[ticket] === "stopped") {{
            delete registry[ticket];
            dioxus.send({{ kind: "end" }});
            return;
        }}
        const recognition = new Recognition();
        registry[ticket] = recognition;
        recognition.continuous = {continuous};
        recognition.interimResults = {interim};
        recognition.lang = {lang};
        recognition.maxAlternatives = {alternatives};
        await new Promise((resolve) => {{
            const finish = () => {{
                delete registry[ticket];
                dioxus.send({{ kind: "end" }});
                resolve();
            }};
            recognition.onstart = () => dioxus.send({{ kind: "start" }});
            recognition.onresult = (event) => dioxus.send({{
                kind: "result",
                transcript: event.results[0][0].transcript,
            }});
            recognition.onerror = (event) => dioxus.send({{ kind: "error", error: event.error }});
            recognition.onend = finish;
            try {{
                recognition.start();
            }} catch (err) {{
                dioxus.send({{ kind: "error", error: String((err && err.name) || err) }});
                finish();
            }}
        }});"#,
        ticket = ticket.value(),
        continuous = config.continuous,
        interim = config.interim_results,
        lang = js_string(&config.lang),
        alternatives = config.max_alternatives,
    )
}

/// Stops a session, or leaves a `"stopped"` marker that its start script
/// checks when the session has not created its recognizer yet.
pub(super) fn stop_recognition_script(ticket: ListenTicket) -> String {
    format!(
        r#"const registry = window.__quizRecognition || (window.__quizRecognition = {{}});
        const recognition = registry[{ticket}];
        if (recognition && recognition !== "stopped") {{
            recognition.stop();
        }} else {{
            registry[{ticket}] = "stopped";
        }}"#,
        ticket = ticket.value(),
    )
}

/// Plays pre-scheduled Web Animations steps once the next frame has painted,
/// so freshly rendered elements exist.
pub(super) fn animation_script(steps_json: &str) -> String {
    format!(
        r"const steps = {steps_json};
        const run = () => {{
            for (const step of steps) {{
                document.querySelectorAll(step.selector).forEach((el) => {{
                    el.animate(step.keyframes, {{
                        duration: step.duration,
                        delay: step.delay,
                        easing: step.easing,
                        fill: step.fill,
                    }});
                }});
            }}
        }};
        requestAnimationFrame(() => requestAnimationFrame(run));"
    )
}
