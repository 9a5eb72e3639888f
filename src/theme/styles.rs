//! Global CSS styles for the Gift Shop.
//!
//! Winter palette, BEM class names shared with the `giftshop-ui` components.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --dark: #181c29;
  --primary: #ff4646;
  --white: #ffffff;
  --white-60: rgba(255, 255, 255, 0.6);
  --white-20: rgba(255, 255, 255, 0.2);

  --tag-work: #4361ff;
  --tag-health: #06a44f;
  --tag-harmony: #ff43f7;

  --radius: 20px;
  --max-width: 1440px;
  --transition: 0.3s ease;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--dark);
  color: var(--white);
  font-family: "Montserrat", "Segoe UI", sans-serif;
  font-size: 16px;
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Typography === */
.h1 { font-size: 48px; font-weight: 800; line-height: 1.2; text-transform: uppercase; }
.h2 { font-size: 32px; font-weight: 700; line-height: 1.2; text-transform: uppercase; }
.h3 { font-size: 24px; font-weight: 700; line-height: 1.2; text-transform: uppercase; }
.h4 { font-size: 16px; font-weight: 700; line-height: 1.2; text-transform: uppercase; }

/* === Page === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.page.modal-opened {
  overflow: hidden;
}

.page__top {
  height: 0;
}

main {
  max-width: var(--max-width);
  margin: 0 auto;
  padding: 0 40px;
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--dark);
}

.header__inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: var(--max-width);
  margin: 0 auto;
  padding: 12px 40px;
}

.header__logo {
  display: flex;
  align-items: center;
  gap: 8px;
}

.header__logo-text {
  font-weight: 700;
  text-transform: uppercase;
}

.header__menu {
  display: flex;
  gap: 8px;
}

.header__link {
  padding: 12px 20px;
  border-radius: 12px;
  font-size: 14px;
  font-weight: 600;
  text-transform: uppercase;
  transition: background var(--transition);
}

.header__link:hover {
  background: var(--white-20);
}

.header__close,
.header__burger {
  display: none;
  background: none;
  border: none;
  color: var(--white);
  cursor: pointer;
}

.header__burger-line {
  display: block;
  width: 24px;
  height: 2px;
  margin: 6px 0;
  background: var(--white);
}

@media (max-width: 768px) {
  .header__burger { display: block; }

  .header__menu {
    position: fixed;
    inset: 0;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    background: var(--dark);
    transform: translateX(100%);
    transition: transform var(--transition);
  }

  .header.menu-burger-opened .header__menu { transform: translateX(0); }
  .header.menu-burger-opened .header__close { display: block; }
}

/* === Hero and about === */
.hero, .gifts__hero {
  padding: 120px 0 60px;
  text-align: center;
}

.hero__text, .about__text, .cta__text {
  margin: 20px auto;
  max-width: 640px;
  color: var(--white-60);
}

.about {
  padding: 60px 0;
}

/* === Slider === */
.slider {
  padding: 60px 0;
}

.slider__window {
  overflow: hidden;
  margin-top: 20px;
}

.slider__items {
  position: relative;
  display: flex;
  gap: 20px;
  width: max-content;
  transition: left var(--transition);
}

.slider__item {
  display: flex;
  align-items: center;
  gap: 20px;
}

.slider__caption {
  font-size: 80px;
  font-weight: 800;
  text-transform: uppercase;
}

.slider__picture {
  height: 200px;
  border-radius: var(--radius);
}

.slider__controls {
  display: flex;
  justify-content: flex-end;
  gap: 20px;
  margin-top: 20px;
}

/* === Cards === */
.best, .gifts {
  padding: 60px 0;
}

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 20px;
  margin-top: 20px;
}

.card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: var(--radius);
  background: var(--white);
  color: var(--dark);
  cursor: pointer;
  transition: transform var(--transition);
}

.card:hover {
  transform: translateY(-4px);
}

.card__picture {
  width: 100%;
  height: 230px;
  object-fit: cover;
}

.card__text {
  padding: 20px;
}

.card__header--work { color: var(--tag-work); }
.card__header--health { color: var(--tag-health); }
.card__header--harmony { color: var(--tag-harmony); }

.card__subheader {
  margin-top: 8px;
}

.card__description {
  margin: 12px 0;
}

.card__info {
  margin-top: 20px;
}

.card__superpowers {
  display: flex;
  flex-direction: column;
  gap: 8px;
  margin-top: 12px;
}

.card__superpower {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.card__rating {
  display: flex;
  align-items: center;
  gap: 16px;
}

.card__stars {
  display: flex;
  gap: 4px;
}

.card__star {
  color: var(--primary);
}

.card__star--disabled {
  opacity: 0.1;
}

/* === Tabs === */
.tabs {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 8px;
}

.tabs__item {
  padding: 12px 20px;
  border: none;
  border-radius: 12px;
  background: none;
  color: var(--white);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition);
}

.tabs__item:hover,
.tabs__item--active {
  background: var(--white-20);
}

/* === Call to action === */
.cta {
  padding: 60px 0;
  text-align: center;
}

.countdown {
  display: flex;
  justify-content: center;
  gap: 20px;
  margin: 20px 0;
}

.countdown__slot {
  display: flex;
  flex-direction: column;
  align-items: center;
  min-width: 80px;
}

.countdown__value {
  font-size: 32px;
  font-weight: 700;
}

.countdown__unit {
  font-size: 12px;
  color: var(--white-60);
  text-transform: uppercase;
}

/* === Footer === */
.footer {
  max-width: var(--max-width);
  margin: 0 auto;
  padding: 60px 40px;
  text-align: center;
}

.footer__contacts {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 20px;
}

.footer__contact {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 8px;
  padding: 20px;
  border-radius: var(--radius);
  background: var(--white-20);
}

.footer__copyright {
  margin-top: 40px;
  color: var(--white-60);
}

/* === Buttons === */
.button {
  border: none;
  color: var(--white);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition), opacity var(--transition);
}

.button--primary {
  padding: 12px 20px;
  border-radius: 12px;
  background: var(--primary);
  text-transform: uppercase;
}

.button--arrow,
.button--round {
  width: 56px;
  height: 56px;
  border: 1px solid var(--white);
  border-radius: 50%;
  background: none;
  font-size: 20px;
}

.button--arrow:hover,
.button--round:hover {
  background: var(--white-20);
}

.button--disabled {
  opacity: 0.4;
  cursor: default;
  pointer-events: none;
}

/* === Scroll to top === */
.up {
  position: fixed;
  right: 20px;
  bottom: 20px;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition);
}

.up--visible {
  opacity: 1;
  pointer-events: auto;
}

.up .button--round {
  background: var(--dark);
}

/* === Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 20;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
}

.modal__dialog {
  position: relative;
  width: 400px;
  max-width: calc(100% - 32px);
  max-height: calc(100% - 32px);
  overflow-y: auto;
  border-radius: var(--radius);
  background: var(--white);
  color: var(--dark);
}

.modal__close {
  position: absolute;
  top: 12px;
  right: 12px;
  border: none;
  background: none;
  font-size: 24px;
  cursor: pointer;
}

.modal__picture {
  width: 100%;
  height: 230px;
  object-fit: cover;
}

.modal__text {
  padding: 20px;
}

@media (max-width: 768px) {
  main, .header__inner, .footer { padding-left: 16px; padding-right: 16px; }
  .h1 { font-size: 32px; }
  .h2 { font-size: 24px; }
  .slider__caption { font-size: 48px; }
}
"#;
