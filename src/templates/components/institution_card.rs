use crate::view::InstitutionCard;
use maud::{html, Markup};

pub fn institution_card(card: &InstitutionCard) -> Markup {
    html! {
        div class="card result-card mb-3" {
            div class="card-body" {
                div class="row" {
                    div class="col-md-8" {
                        h5 class="card-title" {
                            i class="fas fa-hospital text-primary" {}
                            " " (card.name)
                            @if let Some(kind) = &card.kind {
                                " " span class="badge bg-secondary institution-kind" { (kind) }
                            }
                        }
                        p class="card-text" {
                            i class="fas fa-map-marker-alt text-danger" {}
                            " " (card.address)
                        }
                        div class="mb-2 service-badges" {
                            @for badge in &card.badges {
                                span class="badge bg-primary service-badge" { (badge) }
                            }
                        }
                    }
                    div class="col-md-4" {
                        div class="text-md-end" {
                            @if let Some(phone) = &card.phone {
                                p class="mb-1 contact-phone" {
                                    i class="fas fa-phone text-success" {}
                                    " "
                                    a href=(phone.href) class="text-decoration-none" { (phone.label) }
                                }
                            }
                            @if let Some(email) = &card.email {
                                p class="mb-1 contact-email" {
                                    i class="fas fa-envelope text-info" {}
                                    " "
                                    a href=(email.href) class="text-decoration-none" { (email.label) }
                                }
                            }
                            @if let Some(manager) = &card.manager {
                                p class="mb-1 contact-manager" {
                                    i class="fas fa-user text-secondary" {}
                                    " " (manager)
                                }
                            }
                        }
                    }
                }
                div class="row mt-2" {
                    div class="col-12" {
                        small class="text-muted" {
                            "機構代碼: " (card.code)
                            " | 特約期間: " (card.contract.start) " ~ " (card.contract.end)
                        }
                    }
                }
                @if let Some(map) = &card.map {
                    div class="mt-2" {
                        a
                            class="btn btn-outline-primary btn-sm map-link"
                            role="button"
                            href=(map.href)
                            target="_blank"
                            rel="noopener noreferrer"
                            data-coords=(map.coordinates)
                        {
                            i class="fas fa-map" {}
                            " 查看地圖"
                        }
                    }
                }
            }
        }
    }
}
