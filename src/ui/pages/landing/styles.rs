use leptos::prelude::*;

/// Entrance and scroll-reveal animations for the landing sections
#[component]
pub fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @keyframes landing-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }

            @keyframes landing-slide-in-left {
                from { opacity: 0; transform: translateX(-50px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes landing-slide-in-right {
                from { opacity: 0; transform: translateX(50px); }
                to { opacity: 1; transform: translateX(0); }
            }

            @keyframes testimonial-enter {
                from { opacity: 0; transform: translateX(50px); }
                to { opacity: 1; transform: translateX(0); }
            }

            .landing-page-enter {
                animation: landing-fade-in 0.5s ease-out both;
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out both;
            }

            .landing-slide-in-left {
                animation: landing-slide-in-left 0.8s ease-out both;
            }

            .landing-slide-in-right {
                animation: landing-slide-in-right 0.8s ease-out both;
            }

            .landing-delay-200 { animation-delay: 0.2s; }
            .landing-delay-300 { animation-delay: 0.3s; }
            .landing-delay-400 { animation-delay: 0.4s; }
            .landing-delay-500 { animation-delay: 0.5s; }
            .landing-delay-700 { animation-delay: 0.7s; }
            .landing-delay-900 { animation-delay: 0.9s; }

            .testimonial-enter {
                animation: testimonial-enter 0.5s ease-in-out both;
            }

            .star-filled {
                filter: brightness(0) saturate(100%) invert(72%) sepia(76%) saturate(1000%) hue-rotate(5deg);
            }

            /* Hidden until the observer marks them visible */
            .reveal-on-scroll {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }

            .reveal-on-scroll.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @media (prefers-reduced-motion: reduce) {
                .landing-page-enter,
                .landing-fade-in-up,
                .landing-slide-in-left,
                .landing-slide-in-right,
                .testimonial-enter {
                    animation: none;
                }

                .reveal-on-scroll {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
            "#
        </style>
    }
}

/// Reveals `.reveal-on-scroll` elements the first time they scroll into view
#[component]
pub fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initReveal() {
                    if (!('IntersectionObserver' in window)) {
                        document.querySelectorAll('.reveal-on-scroll').forEach(el => el.classList.add('visible'));
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.reveal-on-scroll').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initReveal);
                } else {
                    initReveal();
                }
            })();
            "#
        </script>
    }
}
