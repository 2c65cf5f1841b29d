use yew::prelude::*;

/// Shared CSS for the reveal variants and parallax layers. Rendered once by
/// the app shell.
#[function_component(AnimationStyles)]
pub fn animation_styles() -> Html {
    html! {
        <style>
            {r#"
            .reveal,
            .reveal-left,
            .reveal-right,
            .reveal-scale {
                opacity: 0;
                transition: opacity 0.8s ease, transform 0.8s cubic-bezier(0.5, 0, 0, 1);
                will-change: opacity, transform;
            }
            .reveal { transform: translateY(40px); }
            .reveal-left { transform: translateX(-60px); }
            .reveal-right { transform: translateX(60px); }
            .reveal-scale { transform: scale(0.9); }

            .reveal.active,
            .reveal-left.active,
            .reveal-right.active,
            .reveal-scale.active {
                opacity: 1;
                transform: none;
            }

            .parallax {
                transform: translate3d(0, var(--parallax-offset, 0px), 0);
                will-change: transform;
            }

            @keyframes float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-12px); }
            }
            @keyframes floatText {
                from { opacity: 0; transform: translateY(24px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .animate-float { animation: float 4s ease-in-out infinite; }
            .animate-float-slow { animation: float 6s ease-in-out infinite; }
            .animate-float-text {
                opacity: 0;
                animation: floatText 0.9s ease-out forwards;
            }
            .delay-200 { animation-delay: 200ms; }
            .delay-300 { animation-delay: 300ms; }

            @media (prefers-reduced-motion: reduce) {
                .reveal, .reveal-left, .reveal-right, .reveal-scale {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
                .parallax { transform: none; }
            }
            "#}
        </style>
    }
}
